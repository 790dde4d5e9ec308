// diagnostics of all phases

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
	#[error("{line}: Illegal character '{ch}'")]
	IllegalCharacter { ch: char, line: usize },

	#[error("{line}: Integer value too large ({literal})")]
	IntegerTooLarge { literal: String, line: usize },

	#[error("{line}: Denominator 0 in fraction literal {literal}")]
	ZeroDenominator { literal: String, line: usize },

	#[error("{line}: Unterminated comment")]
	UnterminatedComment { line: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
	#[error("{line}: Syntax Error (token:'{token}')")]
	UnexpectedToken { line: usize, token: String },

	#[error("Unexpected end of input.")]
	UnexpectedEndOfInput,
}

// Whether a call site names a function or a procedure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
	Function,
	Procedure,
}

impl std::fmt::Display for CallKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CallKind::Function => f.write_str("Function"),
			CallKind::Procedure => f.write_str("Procedure"),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SemanticError {
	#[error("{line}: Invalid attribute '{attribute}' in qualified identifier")]
	InvalidAttribute { attribute: String, line: usize },

	#[error("{line}: Invalid modifiable attribute '{attribute}' in lvalue")]
	InvalidModifiableAttribute { attribute: String, line: usize },

	#[error("{line}: Return statement only allowed inside repeat block")]
	ReturnOutsideRepeat { line: usize },

	#[error("{line}: Parameter '{name}' has invalid type '{ty}'")]
	InvalidParameterType { name: String, ty: String, line: usize },

	#[error("{line}: Duplicate parameter name '{name}'")]
	DuplicateParameter { name: String, line: usize },

	#[error("{line}: Return variable '{name}' is already used as a parameter")]
	ReturnVariableIsParameter { name: String, line: usize },

	#[error("{line}: Duplicate local variable '{name}'")]
	DuplicateLocal { name: String, line: usize },

	#[error("{line}: '{name}' defined more than once (first at line {first_line})")]
	DuplicateDefinition { name: String, line: usize, first_line: usize },

	#[error("{line}: Cannot assign to const variable '{name}'")]
	ConstAssignment { name: String, line: usize },

	#[error("{line}: {kind} '{name}' not defined")]
	UndefinedCallee { kind: CallKind, name: String, line: usize },

	#[error("{line}: {kind} '{name}' expects {expected} arguments, got {actual}")]
	ArgumentCountMismatch {
		kind: CallKind,
		name: String,
		expected: usize,
		actual: usize,
		line: usize,
	},

	#[error("{line}: Use of undefined identifier '{name}'")]
	UndefinedIdentifier { name: String, line: usize },
}

// not a user diagnostic: the analyzer broke one of its own invariants
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InternalError {
	#[error("Internal error: symbol '{name}' already in symbol table")]
	DuplicateSymbol { name: String },
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("Cannot read '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error(transparent)]
	Lexical(#[from] LexError),

	#[error(transparent)]
	Syntax(#[from] SyntaxError),

	#[error(transparent)]
	Semantic(#[from] SemanticError),

	#[error(transparent)]
	Internal(#[from] InternalError),
}

impl Error {
	pub fn is_internal(&self) -> bool { matches!(self, Error::Internal(_)) }
}
