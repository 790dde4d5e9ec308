// Uniform view over the syntax tree: a variant tag, a scalar value and
// ordered named children for every node, plus a pre/post order walker.

use super::syntax::{
	Assignment, BinaryExpression, Call, ConcatExpression, DefaultMatch, Definition, Expression,
	FormalArg, FunctionDefinition, Identifier, IfExpression, IfStatement, LValue, LiteralExpression,
	MatchItem, PrintItem, PrintStatement, ProcedureDefinition, Program, QualifiedIdentifier,
	RValue, RepeatStatement, ReturnStatement, Statement, UnaryExpression, VariableDefinition,
};

#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
	Program(&'a Program<'a>),
	VariableDefinition(&'a VariableDefinition<'a>),
	FunctionDefinition(&'a FunctionDefinition<'a>),
	ProcedureDefinition(&'a ProcedureDefinition<'a>),
	FormalArg(&'a FormalArg<'a>),
	MatchItem(&'a MatchItem<'a>),
	DefaultMatch(&'a DefaultMatch<'a>),
	If(&'a IfStatement<'a>),
	Repeat(&'a RepeatStatement<'a>),
	Return(&'a ReturnStatement<'a>),
	Print(&'a PrintStatement<'a>),
	PrintItem(&'a PrintItem<'a>),
	Assignment(&'a Assignment<'a>),
	LValue(&'a LValue<'a>),
	ProcedureCall(&'a Call<'a>),
	FunctionCall(&'a Call<'a>),
	Binary(&'a BinaryExpression<'a>),
	Unary(&'a UnaryExpression<'a>),
	Concat(&'a ConcatExpression<'a>),
	IfExpression(&'a IfExpression<'a>),
	Literal(&'a LiteralExpression),
	Identifier(&'a Identifier<'a>),
	QualifiedIdentifier(&'a QualifiedIdentifier<'a>),
}

#[derive(Clone, Debug)]
pub enum Child<'a> {
	One(Node<'a>),
	Many(Vec<Node<'a>>),
}

impl<'a> From<&'a Definition<'a>> for Node<'a> {
	fn from(d: &'a Definition<'a>) -> Self {
		match d {
			Definition::Function(f) => Node::FunctionDefinition(f),
			Definition::Procedure(p) => Node::ProcedureDefinition(p),
			Definition::Variable(v) => Node::VariableDefinition(v),
		}
	}
}

impl<'a> From<&'a Statement<'a>> for Node<'a> {
	fn from(s: &'a Statement<'a>) -> Self {
		use Statement::*;
		match s {
			If(s) => Node::If(s),
			Repeat(s) => Node::Repeat(s),
			Return(s) => Node::Return(s),
			Print(s) => Node::Print(s),
			Assignment(s) => Node::Assignment(s),
			ProcedureCall(c) => Node::ProcedureCall(c),
		}
	}
}

impl<'a> From<&'a Expression<'a>> for Node<'a> {
	fn from(e: &'a Expression<'a>) -> Self {
		use Expression::*;
		match e {
			Binary(e) => Node::Binary(e),
			Unary(e) => Node::Unary(e),
			Literal(l) => Node::Literal(l),
			Identifier(i) => Node::Identifier(i),
			Qualified(q) => Node::QualifiedIdentifier(q),
			FunctionCall(c) => Node::FunctionCall(c),
		}
	}
}

impl<'a> From<&'a RValue<'a>> for Node<'a> {
	fn from(r: &'a RValue<'a>) -> Self {
		match r {
			RValue::Expression(e) => e.into(),
			RValue::If(e) => Node::IfExpression(e),
			RValue::Concat(e) => Node::Concat(e),
		}
	}
}

fn many<'a, T>(items: &'a [T]) -> Child<'a>
where
	&'a T: Into<Node<'a>>,
{
	Child::Many(items.iter().map(Into::into).collect())
}

fn one<'a>(node: impl Into<Node<'a>>) -> Child<'a> { Child::One(node.into()) }

impl<'a> Node<'a> {
	pub fn tag(&self) -> &'static str {
		use Node::*;
		match self {
			Program(_) => "program",
			VariableDefinition(_) => "variable_definition",
			FunctionDefinition(_) => "function_definition",
			ProcedureDefinition(_) => "procedure_definition",
			FormalArg(_) => "formal_arg",
			MatchItem(_) => "match_item",
			DefaultMatch(_) => "default_match",
			If(_) => "statement_if",
			Repeat(_) => "statement_repeat",
			Return(_) => "statement_return",
			Print(_) => "print",
			PrintItem(_) => "print_item",
			Assignment(_) => "assignment",
			LValue(_) => "lvalue",
			ProcedureCall(_) => "procedure_call",
			FunctionCall(_) => "function_call",
			Binary(_) => "binary_expression",
			Unary(_) => "unary_expression",
			Concat(_) => "concat_expression",
			IfExpression(_) => "if_expression",
			Literal(_) => "literal",
			Identifier(_) => "identifier",
			QualifiedIdentifier(_) => "qualified_identifier",
		}
	}

	// the scalar carried by the node, if any
	pub fn value(&self) -> Option<String> {
		use Node::*;
		match self {
			Program(_) | MatchItem(_) | DefaultMatch(_) | If(_) | Repeat(_) | Return(_)
			| Print(_) | Assignment(_) | Concat(_) | IfExpression(_) => None,
			VariableDefinition(v) => Some(format!("{} {}", v.kind.keyword(), v.name)),
			FunctionDefinition(f) => Some(format!("{} (return {})", f.name, f.return_name)),
			ProcedureDefinition(p) => Some(p.name.to_string()),
			FormalArg(a) => Some(format!("{}:{}", a.name, a.ty)),
			PrintItem(super::syntax::PrintItem::Text(s)) => Some(format!("\"{}\"", s)),
			PrintItem(_) => None,
			LValue(l) => Some(match l.attribute {
				Some(attr) => format!("{}.{}", l.base, attr),
				None => l.base.to_string(),
			}),
			ProcedureCall(c) | FunctionCall(c) => Some(c.callee.to_string()),
			Binary(b) => Some(b.operator.symbol().to_owned()),
			Unary(u) => Some(u.operator.symbol().to_owned()),
			Literal(l) => Some(l.value.to_string()),
			Identifier(i) => Some(i.name.to_owned()),
			QualifiedIdentifier(q) => Some(format!("{}'{}", q.base, q.attribute)),
		}
	}

	pub fn line(&self) -> Option<usize> {
		use Node::*;
		match self {
			Program(_) | PrintItem(_) => None,
			VariableDefinition(n) => Some(n.line),
			FunctionDefinition(n) => Some(n.line),
			ProcedureDefinition(n) => Some(n.line),
			FormalArg(n) => Some(n.line),
			MatchItem(n) => Some(n.line),
			DefaultMatch(n) => Some(n.line),
			If(n) => Some(n.line),
			Repeat(n) => Some(n.line),
			Return(n) => Some(n.line),
			Print(n) => Some(n.line),
			Assignment(n) => Some(n.line),
			LValue(n) => Some(n.line),
			ProcedureCall(n) | FunctionCall(n) => Some(n.line),
			Binary(n) => Some(n.line),
			Unary(n) => Some(n.line),
			Concat(n) => Some(n.line),
			IfExpression(n) => Some(n.line),
			Literal(n) => Some(n.line),
			Identifier(n) => Some(n.line),
			QualifiedIdentifier(n) => Some(n.line),
		}
	}

	// Children in traversal order. Definitions list formals and locals
	// before their bodies.
	pub fn children(&self) -> Vec<(&'static str, Child<'a>)> {
		use Node::*;
		match *self {
			Program(p) => vec![("definitions", many(&p.definitions)), ("statements", many(&p.statements))],
			VariableDefinition(v) => vec![("value", one(&v.value))],
			FunctionDefinition(f) => {
				let mut block: Vec<Node<'a>> = f.match_items.iter().map(Node::MatchItem).collect();
				block.push(Node::DefaultMatch(&f.default));
				vec![
					("formals", Child::Many(f.formals.iter().map(Node::FormalArg).collect())),
					("locals", Child::Many(f.locals.iter().map(Node::VariableDefinition).collect())),
					("match", Child::Many(block)),
				]
			}
			ProcedureDefinition(p) => vec![
				("formals", Child::Many(p.formals.iter().map(Node::FormalArg).collect())),
				("locals", Child::Many(p.locals.iter().map(Node::VariableDefinition).collect())),
				("body", many(&p.body)),
			],
			FormalArg(_) => vec![],
			MatchItem(m) => vec![("guard", one(&m.guard)), ("result", one(&m.result))],
			DefaultMatch(d) => vec![("result", one(&d.result))],
			If(s) => {
				let mut children =
					vec![("condition", one(&s.condition)), ("then", many(&s.then_branch))];
				if let Some(else_branch) = &s.else_branch {
					children.push(("else", many(else_branch)));
				}
				children
			}
			Repeat(s) => vec![("body", many(&s.body)), ("until", one(&s.condition))],
			Return(s) => vec![("value", one(&s.value))],
			Print(s) => vec![("items", Child::Many(s.items.iter().map(Node::PrintItem).collect()))],
			PrintItem(super::syntax::PrintItem::Expression(e)) => vec![("expression", one(e))],
			PrintItem(_) => vec![],
			Assignment(a) => vec![("target", Child::One(Node::LValue(&a.target))), ("value", one(&a.value))],
			LValue(_) => vec![],
			ProcedureCall(c) | FunctionCall(c) => vec![("arguments", many(&c.arguments))],
			Binary(b) => vec![("left", one(b.lhs.as_ref())), ("right", one(b.rhs.as_ref()))],
			Unary(u) => vec![("operand", one(u.operand.as_ref()))],
			Concat(c) => vec![("left", one(c.lhs.as_ref())), ("right", one(c.rhs.as_ref()))],
			IfExpression(e) => vec![
				("condition", one(e.condition.as_ref())),
				("then", one(e.then_value.as_ref())),
				("else", one(e.else_value.as_ref())),
			],
			Literal(_) | Identifier(_) | QualifiedIdentifier(_) => vec![],
		}
	}
}

pub trait Visitor<'a> {
	type Error;

	fn enter(&mut self, node: Node<'a>) -> Result<(), Self::Error>;

	fn exit(&mut self, node: Node<'a>) -> Result<(), Self::Error>;
}

// enter, children in order, exit; the first error stops the walk
pub fn walk<'a, V: Visitor<'a>>(node: Node<'a>, visitor: &mut V) -> Result<(), V::Error> {
	visitor.enter(node)?;
	for (_, child) in node.children() {
		match child {
			Child::One(n) => walk(n, visitor)?,
			Child::Many(ns) => {
				for n in ns {
					walk(n, visitor)?
				}
			}
		}
	}
	visitor.exit(node)
}
