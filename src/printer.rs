// Renders any syntax tree through the generic node view, without
// knowledge of specific node kinds.

use std::{fmt, str::FromStr};

use crate::frontend::tree::{Child, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeFormat {
	Unicode,
	Ascii,
	Dot,
}

impl Default for TreeFormat {
	fn default() -> Self { TreeFormat::Unicode }
}

impl FromStr for TreeFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"unicode" => Ok(TreeFormat::Unicode),
			"ascii" => Ok(TreeFormat::Ascii),
			"dot" => Ok(TreeFormat::Dot),
			_ => Err(format!("unknown tree format '{}' (expected unicode, ascii or dot)", s)),
		}
	}
}

struct Glyphs {
	branch: &'static str,
	last: &'static str,
	pipe: &'static str,
	blank: &'static str,
}

const UNICODE: Glyphs = Glyphs { branch: "├── ", last: "└── ", pipe: "│   ", blank: "    " };
const ASCII: Glyphs = Glyphs { branch: "+-- ", last: "`-- ", pipe: "|   ", blank: "    " };

fn label(node: &Node<'_>) -> String {
	let mut s = node.tag().to_owned();
	if let Some(value) = node.value() {
		s.push_str(": ");
		s.push_str(&value);
	}
	if let Some(line) = node.line() {
		s.push_str(&format!(" (line {})", line));
	}
	s
}

pub struct Tree<'a> {
	root: Node<'a>,
	format: TreeFormat,
}

impl<'a> Tree<'a> {
	pub fn new(root: Node<'a>, format: TreeFormat) -> Self { Tree { root, format } }
}

impl fmt::Display for Tree<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.format {
			TreeFormat::Unicode => write_text(f, self.root, &UNICODE),
			TreeFormat::Ascii => write_text(f, self.root, &ASCII),
			TreeFormat::Dot => write_dot(f, self.root),
		}
	}
}

fn write_text(f: &mut fmt::Formatter<'_>, root: Node<'_>, glyphs: &Glyphs) -> fmt::Result {
	writeln!(f, "{}", label(&root))?;
	write_children(f, root, "", glyphs)
}

fn write_children(
	f: &mut fmt::Formatter<'_>, node: Node<'_>, prefix: &str, g: &Glyphs,
) -> fmt::Result {
	let children = node.children();
	let count = children.len();
	for (i, (field, child)) in children.into_iter().enumerate() {
		let (connector, extension) = if i + 1 == count { (g.last, g.blank) } else { (g.branch, g.pipe) };
		let inner = format!("{}{}", prefix, extension);
		match child {
			Child::One(n) => {
				writeln!(f, "{}{}{}: {}", prefix, connector, field, label(&n))?;
				write_children(f, n, &inner, g)?;
			}
			Child::Many(nodes) => {
				if nodes.is_empty() {
					writeln!(f, "{}{}{}: []", prefix, connector, field)?;
					continue;
				}
				writeln!(f, "{}{}{}", prefix, connector, field)?;
				for (j, n) in nodes.iter().enumerate() {
					let (connector, extension) =
						if j + 1 == nodes.len() { (g.last, g.blank) } else { (g.branch, g.pipe) };
					writeln!(f, "{}{}{}", inner, connector, label(n))?;
					write_children(f, *n, &format!("{}{}", inner, extension), g)?;
				}
			}
		}
	}
	Ok(())
}

fn escape(s: &str) -> String { s.replace('\\', "\\\\").replace('"', "\\\"") }

fn write_dot(f: &mut fmt::Formatter<'_>, root: Node<'_>) -> fmt::Result {
	writeln!(f, "digraph AST {{")?;
	writeln!(f, "\tnode [shape=box];")?;
	let mut next_id = 0;
	write_dot_node(f, root, &mut next_id)?;
	writeln!(f, "}}")
}

fn write_dot_node(f: &mut fmt::Formatter<'_>, node: Node<'_>, next_id: &mut usize) -> fmt::Result {
	let id = *next_id;
	*next_id += 1;
	writeln!(f, "\tn{} [label=\"{}\"];", id, escape(&label(&node)))?;
	for (field, child) in node.children() {
		match child {
			Child::One(n) => {
				let child_id = *next_id;
				write_dot_node(f, n, next_id)?;
				writeln!(f, "\tn{} -> n{} [label=\"{}\"];", id, child_id, field)?;
			}
			Child::Many(nodes) => {
				for (i, n) in nodes.into_iter().enumerate() {
					let child_id = *next_id;
					write_dot_node(f, n, next_id)?;
					writeln!(f, "\tn{} -> n{} [label=\"{}[{}]\"];", id, child_id, field, i)?;
				}
			}
		}
	}
	Ok(())
}
