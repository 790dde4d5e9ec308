// lexical analysis

use std::{fmt, ops::Range};

use logos::Logos;

use crate::error::LexError;

// integer literals must stay strictly below this
pub const INTEGER_LIMIT: i64 = 1_000_000_000;

const COMMENT_MARKER: &str = "---";

// Blanks, newlines and `--- ... ---` comments are skipped; the line counter
// is recomputed from the skipped text.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+|---([^-]|-[^-]|--[^-])*---")]
pub enum TokenKind {
	#[token("(")]
	LParen,
	#[token(")")]
	RParen,
	#[token("[")]
	LSquare,
	#[token("]")]
	RSquare,
	#[token("{")]
	LCurly,
	#[token("}")]
	RCurly,

	#[token("<-")]
	Arrow,
	#[token(":=")]
	Assign,
	#[token("'")]
	Apostrophe,
	#[token("&")]
	Ampersand,
	#[token(",")]
	Comma,
	#[token(":")]
	Colon,
	#[token(";")]
	Semicolon,
	#[token(".")]
	Dot,
	#[token("=")]
	Eq,
	#[token("/=")]
	NotEq,
	#[token("<")]
	Lt,
	#[token("+")]
	Plus,
	#[token("-")]
	Minus,
	#[token("*")]
	Mult,
	#[token("/")]
	Div,
	#[token("%")]
	Mod,

	#[regex(r#""[^"]*""#)]
	String,
	#[regex("[0-9]+_[0-9]+")]
	Fraction,
	#[regex("[0-9]+")]
	Int,
	#[regex("[a-z][a-zA-Z0-9_]*")]
	Ident,
	#[regex("[A-Z][a-z0-9_]+")]
	FuncIdent,
	#[regex("[A-Z][A-Z][A-Z0-9_]*")]
	ProcIdent,

	#[token("let")]
	Let,
	#[token("const")]
	Const,
	#[token("proc")]
	Proc,
	#[token("func")]
	Func,
	#[token("endProc")]
	EndProc,
	#[token("endFunc")]
	EndFunc,
	#[token("return")]
	Return,
	#[token("is")]
	Is,
	#[token("repeat")]
	Repeat,
	#[token("until")]
	Until,
	#[token("if")]
	If,
	#[token("then")]
	Then,
	#[token("else")]
	Else,
	#[token("endif")]
	Endif,
	#[token("print")]
	Print,
	#[token("default")]
	Default,
}

// Tokens are Copy so that the grammar can match them by value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind: TokenKind,
	// string literals: the text between the quotes
	pub lexeme: &'a str,
	pub line: usize,
}

impl fmt::Display for Token<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:>4}  {:<10} {}", self.line, format!("{:?}", self.kind), self.lexeme)
	}
}

// Pull-based token stream over the generated scanner, stops after the
// first error
pub struct Lexer<'a> {
	src: &'a str,
	inner: logos::Lexer<'a, TokenKind>,
	// newlines before this offset are already counted in `line`
	counted: usize,
	line: usize,
	failed: bool,
}

impl<'a> Lexer<'a> {
	pub fn new(src: &'a str) -> Self {
		Self { src, inner: TokenKind::lexer(src), counted: 0, line: 1, failed: false }
	}

	fn line_at(&mut self, offset: usize) -> usize {
		self.line += self.src[self.counted..offset].matches('\n').count();
		self.counted = offset;
		self.line
	}

	fn token(&mut self, kind: TokenKind, span: Range<usize>) -> Result<Token<'a>, LexError> {
		let src = self.src;
		let line = self.line_at(span.start);
		let text = &src[span.clone()];

		let lexeme = match kind {
			// the longer comment pattern did not match, so it never closes
			TokenKind::Minus if src[span.start..].starts_with(COMMENT_MARKER) => {
				return Err(LexError::UnterminatedComment { line });
			}
			TokenKind::Int => check_integer(text, line)?,
			TokenKind::Fraction => check_fraction(text, line)?,
			TokenKind::String => &text[1..text.len() - 1],
			_ => text,
		};
		Ok(Token { kind, lexeme, line })
	}

	fn illegal(&mut self, span: Range<usize>) -> LexError {
		let line = self.line_at(span.start);
		let ch = self.src[span.start..].chars().next().unwrap_or_default();
		LexError::IllegalCharacter { ch, line }
	}
}

fn check_integer(literal: &str, line: usize) -> Result<&str, LexError> {
	match literal.parse::<i64>() {
		Ok(v) if v < INTEGER_LIMIT => Ok(literal),
		_ => Err(LexError::IntegerTooLarge { literal: literal.to_owned(), line }),
	}
}

fn check_fraction(literal: &str, line: usize) -> Result<&str, LexError> {
	let (_, denominator) = fraction_parts(literal)
		.ok_or_else(|| LexError::IntegerTooLarge { literal: literal.to_owned(), line })?;
	if denominator == 0 {
		return Err(LexError::ZeroDenominator { literal: literal.to_owned(), line });
	}
	Ok(literal)
}

impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token<'a>, LexError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}
		let scanned = self.inner.next()?;
		let span = self.inner.span();
		let item = match scanned {
			Ok(kind) => self.token(kind, span),
			Err(()) => Err(self.illegal(span)),
		};
		self.failed = item.is_err();
		Some(item)
	}
}

pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexError> {
	let tokens = Lexer::new(src).collect::<Result<Vec<_>, _>>()?;
	log::debug!("{} tokens", tokens.len());
	Ok(tokens)
}

// "N_D" into its parts, None when either side overflows
pub fn fraction_parts(literal: &str) -> Option<(i64, i64)> {
	let mut parts = literal.splitn(2, '_');
	let numerator = parts.next()?.parse().ok()?;
	let denominator = parts.next()?.parse().ok()?;
	Some((numerator, denominator))
}
