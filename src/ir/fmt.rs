//! Debug pretty-printer for the translated IR.

use std::fmt::Display as _;

use super::{ArithOp, Exp, ExpKind, Function, FunctionId, Label, RelOp, Stm, Temp};
use crate::{
	fmt::{Display, Indentation},
	semantic::types,
	symbol,
	term::color,
};


/// The context for displaying IR nodes.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
	pub interner: &'a symbol::Interner,
	pub types: &'a types::TypeArena,
	pub functions: &'a [Function],
	indentation: Indentation,
}


impl<'a> Context<'a> {
	pub fn new(
		interner: &'a symbol::Interner,
		types: &'a types::TypeArena,
		functions: &'a [Function],
	) -> Self {
		Self {
			interner,
			types,
			functions,
			indentation: Indentation::default(),
		}
	}


	/// Increase the indentation level.
	fn indent(mut self) -> Self {
		self.indentation = self.indentation.increase();
		self
	}


	fn type_context(self) -> types::fmt::Context<'a> {
		types::fmt::Context {
			interner: self.interner,
			types: self.types,
		}
	}
}


/// Begin a new line at the context's indentation.
fn step(f: &mut std::fmt::Formatter, context: Context) -> std::fmt::Result {
	writeln!(f)?;
	context.indentation.fmt(f)
}


impl std::fmt::Display for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "L{}", self.0)
	}
}


impl std::fmt::Display for Temp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "t{}", self.0)
	}
}


impl std::fmt::Display for ArithOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
		}
		.fmt(f)
	}
}


impl std::fmt::Display for RelOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Eq => "=",
			Self::Ne => "<>",
			Self::Lt => "<",
			Self::Le => "<=",
			Self::Gt => ">",
			Self::Ge => ">=",
			Self::And => "&",
			Self::Or => "|",
		}
		.fmt(f)
	}
}


/// The register and size of an expression, appended to its header line.
fn value_info(f: &mut std::fmt::Formatter, exp: &Exp) -> std::fmt::Result {
	" [".fmt(f)?;

	if let Some(temp) = exp.temp {
		write!(f, "{}, ", temp)?;
	}

	write!(f, "{} bytes]", exp.size)
}


impl<'a> Display<'a> for Exp {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		let nested = context.indent();

		match &self.kind {
			ExpKind::Num(value) => {
				color::Fg(color::Yellow, "num ").fmt(f)?;
				value.fmt(f)?;
				value_info(f, self)
			}

			ExpKind::Str { value, label } => {
				color::Fg(color::Yellow, "string ").fmt(f)?;
				write!(f, "{} \"{}\"", label, value.escape_debug())?;
				value_info(f, self)
			}

			ExpKind::Mem { name, nesting_level, offset } => {
				color::Fg(color::Yellow, "mem ").fmt(f)?;
				name.fmt(f, context.interner)?;
				write!(f, " (nesting {}, offset {})", nesting_level, offset)?;
				value_info(f, self)
			}

			ExpKind::Load(location) => {
				color::Fg(color::Yellow, "load").fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				location.fmt(f, nested)
			}

			ExpKind::Field { base, name, offset } => {
				color::Fg(color::Yellow, "field .").fmt(f)?;
				name.fmt(f, context.interner)?;
				write!(f, " (offset {})", offset)?;
				value_info(f, self)?;
				step(f, nested)?;
				base.fmt(f, nested)
			}

			ExpKind::Subscript { base, index } => {
				color::Fg(color::Yellow, "subscript").fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				base.fmt(f, nested)?;
				step(f, nested)?;
				index.fmt(f, nested)
			}

			ExpKind::Record(fields) => {
				color::Fg(color::Yellow, "record").fmt(f)?;
				value_info(f, self)?;

				for field in fields {
					step(f, nested)?;
					field.fmt(f, nested)?;
				}

				Ok(())
			}

			ExpKind::Array(init) => {
				color::Fg(color::Yellow, "array").fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				init.fmt(f, nested)
			}

			ExpKind::Arith { op, left, right } => {
				color::Fg(color::Yellow, "arith ").fmt(f)?;
				op.fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				left.fmt(f, nested)?;
				step(f, nested)?;
				right.fmt(f, nested)
			}

			ExpKind::Div { left, right } => {
				color::Fg(color::Yellow, "div").fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				left.fmt(f, nested)?;
				step(f, nested)?;
				right.fmt(f, nested)
			}

			ExpKind::Rel { op, left, right } => {
				color::Fg(color::Yellow, "rel ").fmt(f)?;
				op.fmt(f)?;
				value_info(f, self)?;
				step(f, nested)?;
				left.fmt(f, nested)?;
				step(f, nested)?;
				right.fmt(f, nested)
			}

			ExpKind::If { test, skip, then } => {
				color::Fg(color::Yellow, "if").fmt(f)?;
				write!(f, " (skip {})", skip)?;
				value_info(f, self)?;
				step(f, nested)?;
				test.fmt(f, nested)?;
				step(f, nested)?;
				then.fmt(f, nested)
			}

			ExpKind::IfElse { test, otherwise_label, then, otherwise, join } => {
				color::Fg(color::Yellow, "if-else").fmt(f)?;
				write!(f, " (otherwise {}, join {})", otherwise_label, join)?;
				value_info(f, self)?;
				step(f, nested)?;
				test.fmt(f, nested)?;
				step(f, nested)?;
				then.fmt(f, nested)?;
				step(f, nested)?;
				otherwise.fmt(f, nested)
			}

			ExpKind::Call { function, args } => {
				color::Fg(color::Yellow, "call ").fmt(f)?;
				function.fmt(f, context.interner)?;
				value_info(f, self)?;

				for arg in args {
					step(f, nested)?;
					arg.fmt(f, nested)?;
				}

				Ok(())
			}

			ExpKind::Seq(stms) => {
				color::Fg(color::Yellow, "seq").fmt(f)?;
				value_info(f, self)?;

				for stm in stms {
					step(f, nested)?;
					stm.fmt(f, nested)?;
				}

				Ok(())
			}
		}
	}
}


impl<'a> Display<'a> for Stm {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		let nested = context.indent();

		match self {
			Self::Assign { value, target } => {
				color::Fg(color::Yellow, "assign").fmt(f)?;
				step(f, nested)?;
				value.fmt(f, nested)?;
				step(f, nested)?;
				target.fmt(f, nested)
			}

			Self::ProcCall { function, args } => {
				color::Fg(color::Yellow, "call ").fmt(f)?;
				function.fmt(f, context.interner)?;

				for arg in args {
					step(f, nested)?;
					arg.fmt(f, nested)?;
				}

				Ok(())
			}

			Self::Seq(stms) => {
				color::Fg(color::Yellow, "seq").fmt(f)?;

				for stm in stms {
					step(f, nested)?;
					stm.fmt(f, nested)?;
				}

				Ok(())
			}

			Self::If { test, skip, then } => {
				color::Fg(color::Yellow, "if").fmt(f)?;
				write!(f, " (skip {})", skip)?;
				step(f, nested)?;
				test.fmt(f, nested)?;
				step(f, nested)?;
				then.fmt(f, nested)
			}

			Self::IfElse { test, otherwise_label, then, otherwise, join } => {
				color::Fg(color::Yellow, "if-else").fmt(f)?;
				write!(f, " (otherwise {}, join {})", otherwise_label, join)?;
				step(f, nested)?;
				test.fmt(f, nested)?;
				step(f, nested)?;
				then.fmt(f, nested)?;
				step(f, nested)?;
				otherwise.fmt(f, nested)
			}

			Self::While { test_label, test, exit, body } => {
				color::Fg(color::Yellow, "while").fmt(f)?;
				write!(f, " (test {}, exit {})", test_label, exit)?;
				step(f, nested)?;
				test.fmt(f, nested)?;
				step(f, nested)?;
				body.fmt(f, nested)
			}

			Self::For { var, lo, hi, test_label, exit, body } => {
				color::Fg(color::Yellow, "for").fmt(f)?;
				write!(f, " (test {}, exit {})", test_label, exit)?;
				step(f, nested)?;
				var.fmt(f, nested)?;
				step(f, nested)?;
				lo.fmt(f, nested)?;
				step(f, nested)?;
				hi.fmt(f, nested)?;
				step(f, nested)?;
				body.fmt(f, nested)
			}

			Self::Break(label) => {
				color::Fg(color::Yellow, "break ").fmt(f)?;
				label.fmt(f)
			}

			Self::Exp(exp) => {
				color::Fg(color::Yellow, "exp").fmt(f)?;
				step(f, nested)?;
				exp.fmt(f, nested)
			}
		}
	}
}


impl<'a> Display<'a> for FunctionId {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		let function = &context.functions[self.index()];

		color::Fg(color::Yellow, "function ").fmt(f)?;
		function.name.fmt(f, context.interner)?;
		write!(f, " (nesting level {})", function.frame.nesting_level)?;

		let nested = context.indent();
		let items = nested.indent();

		if !function.frame.parameters.is_empty() {
			step(f, nested)?;
			"parameters:".fmt(f)?;

			for slot in &function.frame.parameters {
				step(f, items)?;
				slot.name.fmt(f, context.interner)?;
				": ".fmt(f)?;
				slot.ty.fmt(f, context.type_context())?;
			}
		}

		if !function.frame.locals.is_empty() {
			step(f, nested)?;
			"locals:".fmt(f)?;

			for slot in &function.frame.locals {
				step(f, items)?;
				slot.name.fmt(f, context.interner)?;
				": ".fmt(f)?;
				slot.ty.fmt(f, context.type_context())?;
			}
		}

		step(f, nested)?;
		"code:".fmt(f)?;

		for stm in &function.body {
			step(f, items)?;
			stm.fmt(f, items)?;
		}

		for child in &function.children {
			step(f, nested)?;
			child.fmt(f, nested)?;
		}

		Ok(())
	}
}
