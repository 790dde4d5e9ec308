use std::process;

use gumdrop::Options;

use fracc::{
	error::Error,
	frontend::{self, lexer, tree::Node},
	printer::{Tree, TreeFormat},
};

#[derive(Debug, Options)]
struct Opt {
	#[options(help = "print help message")]
	help: bool,

	#[options(
		short = "t",
		long = "treetype",
		meta = "FORMAT",
		help = "syntax tree format: unicode (default), ascii or dot"
	)]
	treetype: Option<TreeFormat>,

	#[options(no_short, help = "print the token stream only")]
	tokens: bool,

	#[options(no_short, help = "parse and print the tree, skip semantic checks")]
	syntax_only: bool,

	#[options(free, required, help = "source file")]
	input: String,
}

// Runs the pipeline selected by the options. Everything produced before a
// failure stays in `out`.
fn compile(opt: &Opt, out: &mut String) -> Result<(), Error> {
	let src = frontend::read_source(&opt.input)?;

	if opt.tokens {
		for token in lexer::tokenize(&src)? {
			out.push_str(&format!("{}\n", token));
		}
		out.push_str("Program ok.\n");
		return Ok(());
	}

	let program = frontend::parse(&src)?;
	let format = opt.treetype.unwrap_or_default();
	out.push_str(&Tree::new(Node::Program(&program), format).to_string());

	if !opt.syntax_only {
		frontend::semantic_analysis(&program)?;
		out.push_str("Semantic checks passed.\n");
	}
	out.push_str("Program ok.\n");
	Ok(())
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let opt = Opt::parse_args_default_or_exit();

	let mut out = String::new();
	let result = compile(&opt, &mut out);
	print!("{}", out);

	if let Err(e) = result {
		if e.is_internal() {
			log::error!("analyzer invariant broken while checking {}", opt.input);
		}
		let (message, status) = diagnostic(&e);
		eprintln!("{}", message);
		process::exit(status);
	}
}

// Problems in the input exit with 1. A broken analyzer invariant is a bug in
// this program, not in the input, and exits with 2.
fn diagnostic(e: &Error) -> (String, i32) {
	if e.is_internal() {
		(format!("{} (this is a bug in fracc, not in the input)", e), 2)
	} else {
		(format!("Error found! {}", e), 1)
	}
}
