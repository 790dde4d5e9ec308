// global symbol table

use std::{collections::HashMap, fmt};

use super::syntax::{FormalArg, FunctionDefinition, ProcedureDefinition, VariableDefinition};
use crate::error::InternalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormalType {
	Integer,
	Fraction,
}

impl FormalType {
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"integer" => Some(FormalType::Integer),
			"fraction" => Some(FormalType::Fraction),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
	Let,
	Const,
	Formal(FormalType),
	// implicit result of a function, always a fraction
	Return,
	Function,
	Procedure,
}

impl fmt::Display for SymbolKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use SymbolKind::*;
		match self {
			Let => f.write_str("let"),
			Const => f.write_str("const"),
			Formal(FormalType::Integer) => f.write_str("integer"),
			Formal(FormalType::Fraction) => f.write_str("fraction"),
			Return => f.write_str("return"),
			Function => f.write_str("function"),
			Procedure => f.write_str("procedure"),
		}
	}
}

// where a symbol was defined
#[derive(Clone, Copy, Debug)]
pub enum SymbolNode<'a> {
	Variable(&'a VariableDefinition<'a>),
	Formal(&'a FormalArg<'a>),
	ReturnVariable(&'a FunctionDefinition<'a>),
	Function(&'a FunctionDefinition<'a>),
	Procedure(&'a ProcedureDefinition<'a>),
}

#[derive(Clone, Copy, Debug)]
pub struct Symbol<'a> {
	pub kind: SymbolKind,
	pub node: SymbolNode<'a>,
}

impl Symbol<'_> {
	// number of formals of the defining function or procedure
	pub fn arity(&self) -> usize {
		match self.node {
			SymbolNode::Function(f) => f.formals.len(),
			SymbolNode::Procedure(p) => p.formals.len(),
			_ => 0,
		}
	}

	pub fn line(&self) -> usize {
		match self.node {
			SymbolNode::Variable(v) => v.line,
			SymbolNode::Formal(a) => a.line,
			SymbolNode::ReturnVariable(f) => f.return_name.line,
			SymbolNode::Function(f) => f.line,
			SymbolNode::Procedure(p) => p.line,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct SymbolTable<'a> {
	symbols: HashMap<&'a str, Symbol<'a>>,
}

impl<'a> SymbolTable<'a> {
	pub fn new() -> Self { Self { symbols: HashMap::new() } }

	// callers check for duplicates first, so a clash here is a bug
	pub fn insert(
		&mut self, name: &'a str, kind: SymbolKind, node: SymbolNode<'a>,
	) -> Result<(), InternalError> {
		if self.symbols.contains_key(name) {
			return Err(InternalError::DuplicateSymbol { name: name.to_owned() });
		}
		log::trace!("symbol {} ({})", name, kind);
		self.symbols.insert(name, Symbol { kind, node });
		Ok(())
	}

	pub fn lookup(&self, name: &str) -> Option<&Symbol<'a>> { self.symbols.get(name) }

	pub fn contains(&self, name: &str) -> bool { self.symbols.contains_key(name) }

	pub(crate) fn len(&self) -> usize { self.symbols.len() }
}
