// Front-end:
//  - lexical analysis
//  - syntax analysis
//  - semantics analysis

use std::{fs, path::Path};

pub mod lexer;
pub mod semantics;
pub mod symbols;
pub mod syntax;
pub mod tree;

use crate::error::Error;
use syntax::Program;

pub fn read_source(src_file: impl AsRef<Path>) -> Result<String, Error> {
	let path = src_file.as_ref();
	fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_owned(), source })
}

pub fn parse(src_code: &str) -> Result<Program<'_>, Error> {
	let tokens = lexer::tokenize(src_code)?;
	let program = syntax::parse(&tokens)?;
	log::debug!(
		"parsed {} definition(s) and {} statement(s)",
		program.definitions.len(),
		program.statements.len()
	);
	Ok(program)
}

pub fn semantic_analysis<'a>(program: &'a Program<'a>) -> Result<symbols::SymbolTable<'a>, Error> {
	semantics::check(program)
}
