// syntax analysis

use std::fmt;

use super::lexer::{fraction_parts, Token, TokenKind as K};
use crate::error::SyntaxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identifier<'a> {
	pub name: &'a str,
	pub line: usize,
}

impl<'a> From<Token<'a>> for Identifier<'a> {
	fn from(t: Token<'a>) -> Self { Identifier { name: t.lexeme, line: t.line } }
}

impl fmt::Display for Identifier<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name) }
}

// always kept in lowest terms, denominator positive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
	pub numerator: i64,
	pub denominator: i64,
}

impl Fraction {
	pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
		if denominator == 0 {
			return None;
		}
		let g = gcd(numerator.abs(), denominator.abs()).max(1);
		let sign = if denominator < 0 { -1 } else { 1 };
		Some(Fraction { numerator: sign * numerator / g, denominator: sign * denominator / g })
	}
}

fn gcd(a: i64, b: i64) -> i64 {
	if b == 0 {
		a
	} else {
		gcd(b, a % b)
	}
}

impl fmt::Display for Fraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
	Integer(i64),
	Fraction(Fraction),
}

impl Literal {
	// the lexer has already range-checked the text
	fn from_token(t: &Token<'_>) -> Option<Self> {
		match t.kind {
			K::Int => t.lexeme.parse().ok().map(Literal::Integer),
			K::Fraction => {
				let (n, d) = fraction_parts(t.lexeme)?;
				Fraction::new(n, d).map(Literal::Fraction)
			}
			_ => None,
		}
	}
}

impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Literal::Integer(i) => write!(f, "{}", i),
			Literal::Fraction(q) => write!(f, "{}", q),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralExpression {
	pub value: Literal,
	pub line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
	Equal,
	NotEqual,
	Less,
	Addition,
	Subtraction,
	Multiplication,
	Division,
	Remainder,
}

impl BinaryOperator {
	pub fn symbol(self) -> &'static str {
		use BinaryOperator::*;
		match self {
			Equal => "=",
			NotEqual => "/=",
			Less => "<",
			Addition => "+",
			Subtraction => "-",
			Multiplication => "*",
			Division => "/",
			Remainder => "%",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
	Plus,
	Negation,
}

impl UnaryOperator {
	pub fn symbol(self) -> &'static str {
		match self {
			UnaryOperator::Plus => "+",
			UnaryOperator::Negation => "-",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression<'a> {
	pub operator: BinaryOperator,
	pub lhs: Box<Expression<'a>>,
	pub rhs: Box<Expression<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpression<'a> {
	pub operator: UnaryOperator,
	pub operand: Box<Expression<'a>>,
	pub line: usize,
}

// x'attr
#[derive(Clone, Debug, PartialEq)]
pub struct QualifiedIdentifier<'a> {
	pub base: Identifier<'a>,
	pub attribute: Identifier<'a>,
	pub line: usize,
}

// Both function and procedure calls
#[derive(Clone, Debug, PartialEq)]
pub struct Call<'a> {
	pub callee: Identifier<'a>,
	pub arguments: Vec<Expression<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression<'a> {
	Binary(BinaryExpression<'a>),
	Unary(UnaryExpression<'a>),
	Literal(LiteralExpression),
	Identifier(Identifier<'a>),
	Qualified(QualifiedIdentifier<'a>),
	FunctionCall(Call<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfExpression<'a> {
	pub condition: Box<Expression<'a>>,
	pub then_value: Box<Expression<'a>>,
	pub else_value: Box<Expression<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConcatExpression<'a> {
	pub lhs: Box<Expression<'a>>,
	pub rhs: Box<Expression<'a>>,
	pub line: usize,
}

// right-hand side of let bindings, assignments and match results
#[derive(Clone, Debug, PartialEq)]
pub enum RValue<'a> {
	Expression(Expression<'a>),
	If(IfExpression<'a>),
	Concat(ConcatExpression<'a>),
}

// x or x.attr
#[derive(Clone, Debug, PartialEq)]
pub struct LValue<'a> {
	pub base: Identifier<'a>,
	pub attribute: Option<Identifier<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment<'a> {
	pub target: LValue<'a>,
	pub value: RValue<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrintItem<'a> {
	Text(&'a str),
	Expression(Expression<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrintStatement<'a> {
	pub items: Vec<PrintItem<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement<'a> {
	pub condition: Expression<'a>,
	pub then_branch: Vec<Statement<'a>>,
	pub else_branch: Option<Vec<Statement<'a>>>,
	pub line: usize,
}

// repeat ... until condition
#[derive(Clone, Debug, PartialEq)]
pub struct RepeatStatement<'a> {
	pub body: Vec<Statement<'a>>,
	pub condition: Expression<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement<'a> {
	pub value: Expression<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement<'a> {
	If(IfStatement<'a>),
	Repeat(RepeatStatement<'a>),
	Return(ReturnStatement<'a>),
	Print(PrintStatement<'a>),
	Assignment(Assignment<'a>),
	ProcedureCall(Call<'a>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
	Let,
	Const,
}

impl DeclarationKind {
	pub fn keyword(self) -> &'static str {
		match self {
			DeclarationKind::Let => "let",
			DeclarationKind::Const => "const",
		}
	}
}

// let x = rvalue, or const x = expression
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'a> {
	pub kind: DeclarationKind,
	pub name: Identifier<'a>,
	pub value: RValue<'a>,
	pub line: usize,
}

// name:type, the type is checked semantically
#[derive(Clone, Debug, PartialEq)]
pub struct FormalArg<'a> {
	pub name: Identifier<'a>,
	pub ty: Identifier<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchItem<'a> {
	pub guard: Expression<'a>,
	pub result: RValue<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DefaultMatch<'a> {
	pub result: RValue<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition<'a> {
	pub name: Identifier<'a>,
	pub formals: Vec<FormalArg<'a>>,
	pub return_name: Identifier<'a>,
	pub locals: Vec<VariableDefinition<'a>>,
	pub match_items: Vec<MatchItem<'a>>,
	pub default: DefaultMatch<'a>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcedureDefinition<'a> {
	pub name: Identifier<'a>,
	pub formals: Vec<FormalArg<'a>>,
	pub locals: Vec<VariableDefinition<'a>>,
	pub body: Vec<Statement<'a>>,
	pub line: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'a> {
	Function(FunctionDefinition<'a>),
	Procedure(ProcedureDefinition<'a>),
	Variable(VariableDefinition<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Program<'a> {
	pub definitions: Vec<Definition<'a>>,
	pub statements: Vec<Statement<'a>>,
}

fn binary<'a>(
	operator: BinaryOperator, lhs: Expression<'a>, rhs: Expression<'a>, op: Token<'a>,
) -> Expression<'a> {
	Expression::Binary(BinaryExpression {
		operator,
		lhs: Box::new(lhs),
		rhs: Box::new(rhs),
		line: op.line,
	})
}

fn unary<'a>(operator: UnaryOperator, operand: Expression<'a>, op: Token<'a>) -> Expression<'a> {
	Expression::Unary(UnaryExpression { operator, operand: Box::new(operand), line: op.line })
}

peg::parser! {grammar parser<'a>() for [Token<'a>] {
	rule ident() -> Identifier<'a>
		= t:[Token { kind: K::Ident, .. }] { t.into() }

	rule function_ident() -> Identifier<'a>
		= t:[Token { kind: K::FuncIdent, .. }] { t.into() }

	rule procedure_ident() -> Identifier<'a>
		= t:[Token { kind: K::ProcIdent, .. }] { t.into() }

	rule literal() -> Expression<'a>
		= t:[Token { kind: K::Int, .. } | Token { kind: K::Fraction, .. }] {?
			Literal::from_token(&t)
				.map(|value| Expression::Literal(LiteralExpression { value, line: t.line }))
				.ok_or("numeric literal")
		}

	rule arguments() -> Vec<Expression<'a>>
		= [Token { kind: K::LParen, .. }] args:(expression() ** [Token { kind: K::Comma, .. }]) [Token { kind: K::RParen, .. }] {
			args
		}

	rule function_call() -> Call<'a>
		= callee:function_ident() arguments:arguments() {
			Call { line: callee.line, callee, arguments }
		}

	rule procedure_call() -> Call<'a>
		= callee:procedure_ident() arguments:arguments() {
			Call { line: callee.line, callee, arguments }
		}

	rule atom() -> Expression<'a>
		= c:function_call() { Expression::FunctionCall(c) }
		/ base:ident() [Token { kind: K::Apostrophe, .. }] attribute:ident() {
			Expression::Qualified(QualifiedIdentifier { line: base.line, base, attribute })
		}
		/ i:ident() { Expression::Identifier(i) }
		/ literal()
		/ [Token { kind: K::LParen, .. }] e:expression() [Token { kind: K::RParen, .. }] { e }

	// a sign applies to an atom only
	rule factor() -> Expression<'a>
		= t:[Token { kind: K::Minus, .. }] a:atom() { unary(UnaryOperator::Negation, a, t) }
		/ t:[Token { kind: K::Plus, .. }] a:atom() { unary(UnaryOperator::Plus, a, t) }
		/ atom()

	pub rule expression() -> Expression<'a> = precedence!{
		a:(@) t:[Token { kind: K::Eq, .. }] b:@ { binary(BinaryOperator::Equal, a, b, t) }
		a:(@) t:[Token { kind: K::NotEq, .. }] b:@ { binary(BinaryOperator::NotEqual, a, b, t) }
		a:(@) t:[Token { kind: K::Lt, .. }] b:@ { binary(BinaryOperator::Less, a, b, t) }
		--
		a:(@) t:[Token { kind: K::Plus, .. }] b:@ { binary(BinaryOperator::Addition, a, b, t) }
		a:(@) t:[Token { kind: K::Minus, .. }] b:@ { binary(BinaryOperator::Subtraction, a, b, t) }
		--
		a:(@) t:[Token { kind: K::Mult, .. }] b:@ { binary(BinaryOperator::Multiplication, a, b, t) }
		a:(@) t:[Token { kind: K::Div, .. }] b:@ { binary(BinaryOperator::Division, a, b, t) }
		a:(@) t:[Token { kind: K::Mod, .. }] b:@ { binary(BinaryOperator::Remainder, a, b, t) }
		--
		f:factor() { f }
	}

	rule if_expression() -> IfExpression<'a>
		= t:[Token { kind: K::If, .. }] c:expression() [Token { kind: K::Then, .. }] a:expression()
		  [Token { kind: K::Else, .. }] b:expression() [Token { kind: K::Endif, .. }] {
			IfExpression {
				condition: Box::new(c),
				then_value: Box::new(a),
				else_value: Box::new(b),
				line: t.line,
			}
		}

	pub rule rvalue() -> RValue<'a>
		= a:expression() t:[Token { kind: K::Ampersand, .. }] b:expression() {
			RValue::Concat(ConcatExpression { lhs: Box::new(a), rhs: Box::new(b), line: t.line })
		}
		/ e:if_expression() { RValue::If(e) }
		/ e:expression() { RValue::Expression(e) }

	rule lvalue() -> LValue<'a>
		= base:ident() attribute:([Token { kind: K::Dot, .. }] a:ident() { a })? {
			LValue { line: base.line, base, attribute }
		}

	rule print_item() -> PrintItem<'a>
		= t:[Token { kind: K::String, .. }] { PrintItem::Text(t.lexeme) }
		/ e:expression() { PrintItem::Expression(e) }

	rule statements() -> Vec<Statement<'a>>
		= statement()+

	rule statement() -> Statement<'a>
		= t:[Token { kind: K::If, .. }] condition:expression() [Token { kind: K::Then, .. }] then_branch:statements()
		  else_branch:([Token { kind: K::Else, .. }] s:statements() { s })? [Token { kind: K::Endif, .. }] {
			Statement::If(IfStatement { condition, then_branch, else_branch, line: t.line })
		}
		/ t:[Token { kind: K::Repeat, .. }] body:statements() [Token { kind: K::Until, .. }] condition:expression() {
			Statement::Repeat(RepeatStatement { body, condition, line: t.line })
		}
		/ t:[Token { kind: K::Return, .. }] value:expression() {
			Statement::Return(ReturnStatement { value, line: t.line })
		}
		/ t:[Token { kind: K::Print, .. }] items:(print_item() ++ [Token { kind: K::Ampersand, .. }]) {
			Statement::Print(PrintStatement { items, line: t.line })
		}
		/ target:lvalue() t:[Token { kind: K::Assign, .. }] value:rvalue() {
			Statement::Assignment(Assignment { target, value, line: t.line })
		}
		/ c:procedure_call() { Statement::ProcedureCall(c) }

	rule variable_definition() -> VariableDefinition<'a>
		= t:[Token { kind: K::Let, .. }] name:ident() [Token { kind: K::Eq, .. }] value:rvalue() {
			VariableDefinition { kind: DeclarationKind::Let, name, value, line: t.line }
		}
		/ t:[Token { kind: K::Const, .. }] name:ident() [Token { kind: K::Eq, .. }] e:expression() {
			VariableDefinition {
				kind: DeclarationKind::Const,
				name,
				value: RValue::Expression(e),
				line: t.line,
			}
		}

	rule formal_arg() -> FormalArg<'a>
		= name:ident() [Token { kind: K::Colon, .. }] ty:ident() {
			FormalArg { line: name.line, name, ty }
		}

	rule formals() -> Vec<FormalArg<'a>>
		= formal_arg() ** [Token { kind: K::Semicolon, .. }]

	rule match_item() -> MatchItem<'a>
		= guard:expression() t:[Token { kind: K::Arrow, .. }] result:rvalue() [Token { kind: K::Comma, .. }] {
			MatchItem { guard, result, line: t.line }
		}

	rule default_match() -> DefaultMatch<'a>
		= t:[Token { kind: K::Default, .. }] [Token { kind: K::Arrow, .. }] result:rvalue() {
			DefaultMatch { result, line: t.line }
		}
		/ t:[Token { kind: K::Arrow, .. }] result:rvalue() {
			DefaultMatch { result, line: t.line }
		}

	rule function_definition() -> FunctionDefinition<'a>
		= t:[Token { kind: K::Func, .. }] name:function_ident()
		  [Token { kind: K::LCurly, .. }] formals:formals() [Token { kind: K::RCurly, .. }]
		  [Token { kind: K::Return, .. }] return_name:ident()
		  locals:variable_definition()*
		  [Token { kind: K::Is, .. }] match_items:match_item()* default:default_match()
		  [Token { kind: K::EndFunc, .. }] {
			FunctionDefinition { name, formals, return_name, locals, match_items, default, line: t.line }
		}

	rule procedure_definition() -> ProcedureDefinition<'a>
		= t:[Token { kind: K::Proc, .. }] name:procedure_ident()
		  [Token { kind: K::LSquare, .. }] formals:formals() [Token { kind: K::RSquare, .. }]
		  locals:variable_definition()*
		  [Token { kind: K::Is, .. }] body:statements() [Token { kind: K::EndProc, .. }] {
			ProcedureDefinition { name, formals, locals, body, line: t.line }
		}

	rule definition() -> Definition<'a>
		= f:function_definition() { Definition::Function(f) }
		/ p:procedure_definition() { Definition::Procedure(p) }
		/ v:variable_definition() { Definition::Variable(v) }

	pub rule program() -> Program<'a>
		= definitions:definition()* statements:statements() {
			Program { definitions, statements }
		}
}}

fn syntax_error(tokens: &[Token<'_>], location: usize) -> SyntaxError {
	match tokens.get(location) {
		Some(t) => SyntaxError::UnexpectedToken { line: t.line, token: t.lexeme.to_owned() },
		None => SyntaxError::UnexpectedEndOfInput,
	}
}

pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Program<'a>, SyntaxError> {
	parser::program(tokens).map_err(|e| {
		log::debug!("parse failed at token {}, expected {}", e.location, e.expected);
		syntax_error(tokens, e.location)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::frontend::lexer::tokenize;

	fn program(src: &str) -> Program<'_> { parse(&tokenize(src).unwrap()).unwrap() }

	fn expression(src: &str) -> Expression<'_> {
		parser::expression(&tokenize(src).unwrap()).unwrap()
	}

	fn syntax_err(src: &str) -> SyntaxError { parse(&tokenize(src).unwrap()).unwrap_err() }

	#[test]
	fn multiplicative_binds_tighter() {
		let e = expression("a + b * c");
		match e {
			Expression::Binary(BinaryExpression { operator: BinaryOperator::Addition, rhs, .. }) => {
				assert!(matches!(*rhs, Expression::Binary(BinaryExpression {
					operator: BinaryOperator::Multiplication,
					..
				})));
			}
			_ => panic!("expected an addition at the root"),
		}
	}

	#[test]
	fn binary_levels_are_left_associative() {
		let e = expression("a - b - c");
		match e {
			Expression::Binary(BinaryExpression { lhs, rhs, .. }) => {
				assert!(matches!(*lhs, Expression::Binary(_)));
				assert!(matches!(*rhs, Expression::Identifier(Identifier { name: "c", .. })));
			}
			_ => panic!("expected a subtraction at the root"),
		}
	}

	#[test]
	fn comparison_is_lowest() {
		let e = expression("a + 1 < b * 2");
		assert!(matches!(e, Expression::Binary(BinaryExpression { operator: BinaryOperator::Less, .. })));
	}

	#[test]
	fn sign_applies_to_atom() {
		assert!(matches!(expression("-x"), Expression::Unary(_)));
		assert!(matches!(expression("-(x + 1)"), Expression::Unary(_)));
		assert!(parser::expression(&tokenize("- -x").unwrap()).is_err());
	}

	#[test]
	fn atoms() {
		assert!(matches!(expression("x'num"), Expression::Qualified(_)));
		assert!(matches!(expression("Square(1, 2)"), Expression::FunctionCall(Call { ref arguments, .. }) if arguments.len() == 2));
		assert!(matches!(expression("Zero()"), Expression::FunctionCall(Call { ref arguments, .. }) if arguments.is_empty()));
		assert_eq!(
			expression("6_8"),
			Expression::Literal(LiteralExpression {
				value: Literal::Fraction(Fraction { numerator: 3, denominator: 4 }),
				line: 1
			})
		);
	}

	#[test]
	fn let_accepts_rvalues_const_does_not() {
		let p = program("let s = a & b\nlet t = if a < b then a else b endif\nprint s");
		assert!(matches!(
			p.definitions[0],
			Definition::Variable(VariableDefinition { value: RValue::Concat(_), .. })
		));
		assert!(matches!(
			p.definitions[1],
			Definition::Variable(VariableDefinition { value: RValue::If(_), .. })
		));

		assert_eq!(
			syntax_err("const s = a & b\nprint s"),
			SyntaxError::UnexpectedToken { line: 1, token: "&".to_owned() }
		);
	}

	#[test]
	fn function_definition() {
		let p = program(
			"func Sign{n:integer} return r is\n\
			 n < 0 <- -1,\n\
			 n = 0 <- 0,\n\
			 default <- 1\n\
			 endFunc\n\
			 print Sign(3)",
		);
		match &p.definitions[0] {
			Definition::Function(f) => {
				assert_eq!(f.name.name, "Sign");
				assert_eq!(f.formals.len(), 1);
				assert_eq!(f.formals[0].ty.name, "integer");
				assert_eq!(f.return_name.name, "r");
				assert_eq!(f.match_items.len(), 2);
				assert_eq!(f.default.line, 4);
			}
			_ => panic!("expected a function definition"),
		}
	}

	#[test]
	fn bare_default_match() {
		let p = program("func One{} return r is <- 1 endFunc\nprint One()");
		match &p.definitions[0] {
			Definition::Function(f) => {
				assert!(f.formals.is_empty());
				assert!(f.match_items.is_empty());
			}
			_ => panic!("expected a function definition"),
		}
	}

	#[test]
	fn procedure_definition() {
		let p = program(
			"proc SHOW[a:integer; b:fraction]\n\
			 let t = a\n\
			 is\n\
			 print \"t = \" & t\n\
			 t.num := b'den\n\
			 endProc\n\
			 SHOW(1, 2_3)",
		);
		match &p.definitions[0] {
			Definition::Procedure(proc_def) => {
				assert_eq!(proc_def.formals.len(), 2);
				assert_eq!(proc_def.locals.len(), 1);
				assert_eq!(proc_def.body.len(), 2);
				match &proc_def.body[0] {
					Statement::Print(PrintStatement { items, .. }) => {
						assert_eq!(items[0], PrintItem::Text("t = "));
					}
					_ => panic!("expected a print statement"),
				}
			}
			_ => panic!("expected a procedure definition"),
		}
		assert!(matches!(p.statements[0], Statement::ProcedureCall(_)));
	}

	#[test]
	fn statements_keep_source_order() {
		let p = program("a := 1\nb := 2\nif a < b then print a else print b endif\nrepeat a := a + 1 until b < a");
		let lines: Vec<_> = p
			.statements
			.iter()
			.map(|s| match s {
				Statement::Assignment(Assignment { line, .. })
				| Statement::If(IfStatement { line, .. })
				| Statement::Repeat(RepeatStatement { line, .. }) => *line,
				_ => 0,
			})
			.collect();
		assert_eq!(lines, vec![1, 2, 3, 4]);
	}

	#[test]
	fn lvalue_attribute() {
		let p = program("x.den := 2");
		match &p.statements[0] {
			Statement::Assignment(Assignment { target, .. }) => {
				assert_eq!(target.base.name, "x");
				assert_eq!(target.attribute.map(|a| a.name), Some("den"));
			}
			_ => panic!("expected an assignment"),
		}
	}

	#[test]
	fn unexpected_token() {
		assert_eq!(
			syntax_err("x := 1\ny := := 2"),
			SyntaxError::UnexpectedToken { line: 2, token: ":=".to_owned() }
		);
	}

	#[test]
	fn unexpected_end_of_input() {
		assert_eq!(syntax_err("if a then print a"), SyntaxError::UnexpectedEndOfInput);
		assert_eq!(syntax_err(""), SyntaxError::UnexpectedEndOfInput);
	}

	#[test]
	fn definitions_need_a_statement() {
		assert_eq!(syntax_err("let x = 1"), SyntaxError::UnexpectedEndOfInput);
	}
}
