// semantics analysis

use std::collections::HashSet;

use super::{
	symbols::{FormalType, SymbolKind, SymbolNode, SymbolTable},
	syntax::{
		Call, DeclarationKind, FormalArg, FunctionDefinition, Identifier, ProcedureDefinition,
		Program, VariableDefinition,
	},
	tree::{walk, Node, Visitor},
};
use crate::error::{CallKind, Error, SemanticError};

const READABLE_ATTRIBUTES: &[&str] = &["num", "den", "int"];
const MODIFIABLE_ATTRIBUTES: &[&str] = &["num", "den"];

// Mutable state of one analysis run
#[derive(Debug, Default)]
pub struct SemanticContext<'a> {
	pub inside_repeat: bool,
	pub inside_function: Option<&'a str>,
	// global definitions seen so far, for duplicate detection only
	pub declared_globals: HashSet<&'a str>,
	// formals, return variable and locals of the current definition
	pub local_scope: HashSet<&'a str>,
}

impl<'a> SemanticContext<'a> {
	pub fn new() -> Self { Self::default() }

	fn is_local(&self, name: &str) -> bool { self.local_scope.contains(name) }
}

// What a function and a procedure definition have in common on entry
struct DefinitionHeader<'a> {
	name: Identifier<'a>,
	formals: &'a [FormalArg<'a>],
	return_name: Option<(Identifier<'a>, &'a FunctionDefinition<'a>)>,
	locals: &'a [VariableDefinition<'a>],
	kind: SymbolKind,
	node: SymbolNode<'a>,
}

impl<'a> DefinitionHeader<'a> {
	fn function(f: &'a FunctionDefinition<'a>) -> Self {
		DefinitionHeader {
			name: f.name,
			formals: &f.formals,
			return_name: Some((f.return_name, f)),
			locals: &f.locals,
			kind: SymbolKind::Function,
			node: SymbolNode::Function(f),
		}
	}

	fn procedure(p: &'a ProcedureDefinition<'a>) -> Self {
		DefinitionHeader {
			name: p.name,
			formals: &p.formals,
			return_name: None,
			locals: &p.locals,
			kind: SymbolKind::Procedure,
			node: SymbolNode::Procedure(p),
		}
	}
}

pub struct Analyzer<'a> {
	symbols: SymbolTable<'a>,
	context: SemanticContext<'a>,
}

impl<'a> Analyzer<'a> {
	pub fn new() -> Self { Analyzer { symbols: SymbolTable::new(), context: SemanticContext::new() } }

	fn declare_global(&mut self, name: Identifier<'a>) -> Result<(), SemanticError> {
		if !self.context.declared_globals.insert(name.name) {
			// every declared global was inserted right after its declaration
			let first_line = self.symbols.lookup(name.name).map_or(name.line, |s| s.line());
			return Err(SemanticError::DuplicateDefinition {
				name: name.name.to_owned(),
				line: name.line,
				first_line,
			});
		}
		Ok(())
	}

	fn enter_definition(&mut self, header: DefinitionHeader<'a>) -> Result<(), Error> {
		let DefinitionHeader { name, formals, return_name, locals, kind, node } = header;

		// registered before the body so that recursive calls resolve
		self.declare_global(name)?;
		self.symbols.insert(name.name, kind, node)?;

		self.context.inside_function = Some(name.name);
		self.context.local_scope.clear();
		let mut seen = HashSet::new();

		for arg in formals {
			let ty = FormalType::from_name(arg.ty.name).ok_or_else(|| {
				SemanticError::InvalidParameterType {
					name: arg.name.name.to_owned(),
					ty: arg.ty.name.to_owned(),
					line: arg.line,
				}
			})?;
			if !seen.insert(arg.name.name) {
				return Err(SemanticError::DuplicateParameter {
					name: arg.name.name.to_owned(),
					line: arg.line,
				}
				.into());
			}
			self.context.local_scope.insert(arg.name.name);
			self.symbols.insert(arg.name.name, SymbolKind::Formal(ty), SymbolNode::Formal(arg))?;
		}

		if let Some((ret, f)) = return_name {
			if !seen.insert(ret.name) {
				return Err(SemanticError::ReturnVariableIsParameter {
					name: ret.name.to_owned(),
					line: ret.line,
				}
				.into());
			}
			self.context.local_scope.insert(ret.name);
			self.symbols.insert(ret.name, SymbolKind::Return, SymbolNode::ReturnVariable(f))?;
		}

		// locals never reach the global table
		for local in locals {
			if !seen.insert(local.name.name) {
				return Err(SemanticError::DuplicateLocal {
					name: local.name.name.to_owned(),
					line: local.line,
				}
				.into());
			}
			self.context.local_scope.insert(local.name.name);
		}

		log::debug!(
			"entering {} {} with {} local name(s)",
			kind,
			name,
			self.context.local_scope.len()
		);
		Ok(())
	}

	fn exit_definition(&mut self) {
		self.context.inside_function = None;
		self.context.local_scope.clear();
	}

	fn enter_global_variable(&mut self, v: &'a VariableDefinition<'a>) -> Result<(), Error> {
		if self.context.inside_function.is_some() {
			return Ok(());
		}
		self.declare_global(v.name)?;
		let kind = match v.kind {
			DeclarationKind::Let => SymbolKind::Let,
			DeclarationKind::Const => SymbolKind::Const,
		};
		self.symbols.insert(v.name.name, kind, SymbolNode::Variable(v))?;
		Ok(())
	}

	fn check_call(&self, call: &Call<'a>, kind: CallKind) -> Result<(), SemanticError> {
		let Call { callee, arguments, line } = call;
		let symbol = self.symbols.lookup(callee.name).ok_or_else(|| SemanticError::UndefinedCallee {
			kind,
			name: callee.name.to_owned(),
			line: *line,
		})?;
		let expected = symbol.arity();
		if arguments.len() != expected {
			return Err(SemanticError::ArgumentCountMismatch {
				kind,
				name: callee.name.to_owned(),
				expected,
				actual: arguments.len(),
				line: *line,
			});
		}
		Ok(())
	}
}

impl Default for Analyzer<'_> {
	fn default() -> Self { Self::new() }
}

impl<'a> Visitor<'a> for Analyzer<'a> {
	type Error = Error;

	fn enter(&mut self, node: Node<'a>) -> Result<(), Error> {
		log::trace!("enter {}", node.tag());
		match node {
			Node::QualifiedIdentifier(q) => {
				if !READABLE_ATTRIBUTES.contains(&q.attribute.name) {
					return Err(SemanticError::InvalidAttribute {
						attribute: q.attribute.name.to_owned(),
						line: q.line,
					}
					.into());
				}
			}

			Node::LValue(l) => {
				if let Some(attribute) = l.attribute {
					if !MODIFIABLE_ATTRIBUTES.contains(&attribute.name) {
						return Err(SemanticError::InvalidModifiableAttribute {
							attribute: attribute.name.to_owned(),
							line: l.line,
						}
						.into());
					}
				}
			}

			Node::Repeat(_) => self.context.inside_repeat = true,

			Node::Return(r) => {
				if !self.context.inside_repeat {
					return Err(SemanticError::ReturnOutsideRepeat { line: r.line }.into());
				}
			}

			Node::FunctionDefinition(f) => self.enter_definition(DefinitionHeader::function(f))?,

			Node::ProcedureDefinition(p) => self.enter_definition(DefinitionHeader::procedure(p))?,

			Node::VariableDefinition(v) => self.enter_global_variable(v)?,

			Node::Assignment(a) => {
				let name = a.target.base.name;
				// a local of the same spelling shadows the const
				if let Some(symbol) = self.symbols.lookup(name) {
					if symbol.kind == SymbolKind::Const && !self.context.is_local(name) {
						return Err(SemanticError::ConstAssignment {
							name: name.to_owned(),
							line: a.line,
						}
						.into());
					}
				}
			}

			_ => {}
		}
		Ok(())
	}

	fn exit(&mut self, node: Node<'a>) -> Result<(), Error> {
		match node {
			Node::Repeat(_) => self.context.inside_repeat = false,

			Node::FunctionDefinition(_) | Node::ProcedureDefinition(_) => self.exit_definition(),

			Node::FunctionCall(c) => self.check_call(c, CallKind::Function)?,

			Node::ProcedureCall(c) => self.check_call(c, CallKind::Procedure)?,

			Node::Identifier(i) => {
				if !self.symbols.contains(i.name) && !self.context.is_local(i.name) {
					return Err(SemanticError::UndefinedIdentifier {
						name: i.name.to_owned(),
						line: i.line,
					}
					.into());
				}
			}

			_ => {}
		}
		Ok(())
	}
}

// Checks a whole program; a fresh table and context per call
pub fn check<'a>(program: &'a Program<'a>) -> Result<SymbolTable<'a>, Error> {
	let mut analyzer = Analyzer::new();
	walk(Node::Program(program), &mut analyzer)?;
	log::debug!("semantic checks passed, {} global symbol(s)", analyzer.symbols.len());
	Ok(analyzer.symbols)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::InternalError,
		frontend::{lexer::tokenize, syntax::parse},
	};

	fn analyze(src: &str) -> Result<(), Error> {
		let tokens = tokenize(src).unwrap();
		let program = parse(&tokens).unwrap();
		check(&program).map(|_| ())
	}

	fn semantic_error(src: &str) -> SemanticError {
		match analyze(src) {
			Err(Error::Semantic(e)) => e,
			other => panic!("expected a semantic error, got {:?}", other),
		}
	}

	#[test]
	fn valid_program() {
		let src = "\
			let x = 3_4\n\
			const limit = 10\n\
			func Half{v:fraction} return r let t = v / 2 is\n\
			  v < 0 <- -t,\n\
			  default <- t\n\
			endFunc\n\
			proc SHOW[a:integer]\n\
			  let n = a\n\
			is\n\
			  repeat\n\
			    n := n + 1\n\
			    if limit < n then return n endif\n\
			  until limit < n\n\
			  print \"n = \" & n & Half(x)\n\
			endProc\n\
			SHOW(1)\n\
			x.num := x'den + x'int\n";
		assert!(analyze(src).is_ok(), "{:?}", analyze(src));
	}

	#[test]
	fn duplicate_globals_of_any_kind() {
		for (first, second) in &[("let", "let"), ("let", "const"), ("const", "let"), ("const", "const")] {
			let src = format!("{} a = 1\n{} a = 2\nprint a", first, second);
			assert_eq!(
				semantic_error(&src),
				SemanticError::DuplicateDefinition { name: "a".to_owned(), line: 2, first_line: 1 }
			);
		}
	}

	#[test]
	fn duplicate_function() {
		let src = "func Fun{} return r is <- 1 endFunc\nfunc Fun{} return s is <- 2 endFunc\nprint Fun()";
		assert_eq!(
			semantic_error(src),
			SemanticError::DuplicateDefinition { name: "Fun".to_owned(), line: 2, first_line: 1 }
		);
	}

	#[test]
	fn duplicate_procedure() {
		let src = "proc SHOW[] is print 1 endProc\nlet n = 0\n\nproc SHOW[a:integer] is print a endProc\nSHOW()";
		assert_eq!(
			semantic_error(src),
			SemanticError::DuplicateDefinition { name: "SHOW".to_owned(), line: 4, first_line: 1 }
		);
	}

	#[test]
	fn bare_default_is_valid() {
		assert!(analyze("func One{} return r is <- 1 endFunc\nprint One()").is_ok());
	}

	#[test]
	fn return_inside_repeat() {
		assert!(analyze("let i = 0\nrepeat\ni := i + 1\nreturn i\nuntil 3 < i").is_ok());
	}

	#[test]
	fn return_outside_repeat() {
		assert_eq!(
			semantic_error("let i = 0\nreturn i"),
			SemanticError::ReturnOutsideRepeat { line: 2 }
		);
		assert_eq!(
			semantic_error("let i = 0\nif i < 1 then\nreturn i\nendif"),
			SemanticError::ReturnOutsideRepeat { line: 3 }
		);
	}

	#[test]
	fn leaving_a_repeat_clears_the_flag() {
		assert_eq!(
			semantic_error(
				"let i = 0\nrepeat\nrepeat i := i + 1 until 1 < i\nreturn i\nuntil 3 < i"
			),
			SemanticError::ReturnOutsideRepeat { line: 4 }
		);
	}

	#[test]
	fn const_assignment() {
		assert_eq!(
			semantic_error("const pi = 3\npi := 4"),
			SemanticError::ConstAssignment { name: "pi".to_owned(), line: 2 }
		);
		assert_eq!(
			semantic_error("const pi = 3\npi.num := 4"),
			SemanticError::ConstAssignment { name: "pi".to_owned(), line: 2 }
		);
	}

	#[test]
	fn local_shadows_const_for_assignment() {
		let src = "const pi = 3\nproc RESET[] let pi = 1 is pi := 4 endProc\nRESET()";
		assert!(analyze(src).is_ok());

		let src = "let pi = 3\nproc SET[] let pi = 1 is pi := 4 endProc\nSET()";
		assert!(analyze(src).is_ok());
	}

	#[test]
	fn locals_stay_out_of_the_global_table() {
		let src = "proc SET[] let hidden = 1 is hidden := 2 endProc\nSET()";
		let tokens = tokenize(src).unwrap();
		let program = parse(&tokens).unwrap();
		let symbols = check(&program).unwrap();
		assert!(symbols.lookup("hidden").is_none());
		assert_eq!(symbols.lookup("SET").map(|s| s.kind), Some(SymbolKind::Procedure));

		assert_eq!(
			semantic_error("proc SET[] let hidden = 1 is hidden := 2 endProc\nprint hidden"),
			SemanticError::UndefinedIdentifier { name: "hidden".to_owned(), line: 2 }
		);
	}

	#[test]
	fn formals_and_return_variable_are_registered() {
		let src = "func Id{v:integer} return r is <- v endFunc\nprint Id(1)";
		let tokens = tokenize(src).unwrap();
		let program = parse(&tokens).unwrap();
		let symbols = check(&program).unwrap();
		assert_eq!(
			symbols.lookup("v").map(|s| s.kind),
			Some(SymbolKind::Formal(FormalType::Integer))
		);
		assert_eq!(symbols.lookup("r").map(|s| s.kind), Some(SymbolKind::Return));
		assert_eq!(symbols.lookup("Id").map(|s| s.arity()), Some(1));
	}

	#[test]
	fn no_forward_references() {
		let src = "func Fa{} return r is <- Fb() endFunc\nfunc Fb{} return s is <- 1 endFunc\nprint Fa()";
		assert_eq!(
			semantic_error(src),
			SemanticError::UndefinedCallee {
				kind: CallKind::Function,
				name: "Fb".to_owned(),
				line: 1
			}
		);

		let src = "proc FIRST[] is SECOND() endProc\nproc SECOND[] is print 1 endProc\nFIRST()";
		assert_eq!(
			semantic_error(src),
			SemanticError::UndefinedCallee {
				kind: CallKind::Procedure,
				name: "SECOND".to_owned(),
				line: 1
			}
		);
	}

	#[test]
	fn recursion_is_allowed() {
		let src = "func Fact{n:integer} return r is n < 1 <- 1, <- n * Fact(n - 1) endFunc\nprint Fact(5)";
		assert!(analyze(src).is_ok());
	}

	#[test]
	fn argument_count_mismatch() {
		let e = semantic_error("func Add{a:integer; b:integer} return r is <- a + b endFunc\nprint Add(1)");
		assert_eq!(
			e,
			SemanticError::ArgumentCountMismatch {
				kind: CallKind::Function,
				name: "Add".to_owned(),
				expected: 2,
				actual: 1,
				line: 2
			}
		);
		assert!(e.to_string().contains("expects 2 arguments, got 1"));
	}

	#[test]
	fn procedure_argument_count_mismatch() {
		let src = "proc SHOW[a:integer; b:fraction] is print a & b endProc\nSHOW(1, 2, 3)";
		assert_eq!(
			semantic_error(src),
			SemanticError::ArgumentCountMismatch {
				kind: CallKind::Procedure,
				name: "SHOW".to_owned(),
				expected: 2,
				actual: 3,
				line: 2
			}
		);
		assert!(analyze("proc SHOW[a:integer; b:fraction] is print a & b endProc\nSHOW(1, 2)").is_ok());
	}

	#[test]
	fn invalid_attributes() {
		assert_eq!(
			semantic_error("let x = 1_2\nprint x'bogus"),
			SemanticError::InvalidAttribute { attribute: "bogus".to_owned(), line: 2 }
		);
		assert_eq!(
			semantic_error("let x = 1_2\nx.int := 1"),
			SemanticError::InvalidModifiableAttribute { attribute: "int".to_owned(), line: 2 }
		);
	}

	#[test]
	fn parameter_checks() {
		assert_eq!(
			semantic_error("proc PR[a:real] is print a endProc\nPR(1)"),
			SemanticError::InvalidParameterType {
				name: "a".to_owned(),
				ty: "real".to_owned(),
				line: 1
			}
		);
		assert_eq!(
			semantic_error("proc PR[a:integer; a:fraction] is print a endProc\nPR(1, 2)"),
			SemanticError::DuplicateParameter { name: "a".to_owned(), line: 1 }
		);
		assert_eq!(
			semantic_error("func Fun{r:integer} return r is <- r endFunc\nprint Fun(1)"),
			SemanticError::ReturnVariableIsParameter { name: "r".to_owned(), line: 1 }
		);
	}

	#[test]
	fn duplicate_locals() {
		assert_eq!(
			semantic_error("proc PR[a:integer]\nlet a = 1\nis print a endProc\nPR(1)"),
			SemanticError::DuplicateLocal { name: "a".to_owned(), line: 2 }
		);
		assert_eq!(
			semantic_error("func Fun{} return r\nlet r = 1\nis <- r endFunc\nprint Fun()"),
			SemanticError::DuplicateLocal { name: "r".to_owned(), line: 2 }
		);
		assert_eq!(
			semantic_error("proc PR[]\nlet t = 1\nlet t = 2\nis print t endProc\nPR()"),
			SemanticError::DuplicateLocal { name: "t".to_owned(), line: 3 }
		);
	}

	#[test]
	fn undefined_identifier() {
		assert_eq!(
			semantic_error("print \"a\" & ghost"),
			SemanticError::UndefinedIdentifier { name: "ghost".to_owned(), line: 1 }
		);
	}

	#[test]
	fn formal_clashing_with_global_is_internal() {
		let src = "let n = 1\nproc PR[n:integer] is print n endProc\nPR(1)";
		match analyze(src) {
			Err(Error::Internal(InternalError::DuplicateSymbol { name })) => assert_eq!(name, "n"),
			other => panic!("expected an internal error, got {:?}", other),
		}
	}

	#[test]
	fn analyzer_is_fresh_per_run() {
		let src = "let a = 1\nprint a";
		assert!(analyze(src).is_ok());
		assert!(analyze(src).is_ok());
	}
}
