//! Debug pretty-printer for the AST. This has no semantic role.

use std::fmt::Display as _;

use super::{BinOp, Dec, Exp, Field, FieldInit, FunDec, Ty, TypeDec, Var};
use crate::{
	fmt::{self, Display, Indentation},
	symbol,
	term::color,
};


/// The context for displaying AST nodes.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
	interner: &'a symbol::Interner,
	/// Indentation level. None indicates inline notation.
	indentation: Option<Indentation>,
}


impl<'a> Context<'a> {
	/// Increase the indentation level.
	fn indent(mut self) -> Self {
		self.indentation = self.indentation.map(Indentation::increase);
		self
	}
}


impl<'a> From<&'a symbol::Interner> for Context<'a> {
	fn from(interner: &'a symbol::Interner) -> Self {
		Self { interner, indentation: Some(Indentation::default()) }
	}
}


/// Begin a new line, or emit a single space when inlined.
fn step(f: &mut std::fmt::Formatter, context: Context) -> std::fmt::Result {
	if let Some(indentation) = context.indentation {
		writeln!(f)?;
		indentation.fmt(f)
	} else {
		" ".fmt(f)
	}
}


impl std::fmt::Display for BinOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
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


impl<'a> Display<'a> for Var {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Simple { name, .. } => name.fmt(f, context.interner),

			Self::Field { parent, name, .. } => {
				parent.fmt(f, context)?;
				".".fmt(f)?;
				name.fmt(f, context.interner)
			}

			Self::Subscript { array, index, .. } => {
				array.fmt(f, context)?;
				"[".fmt(f)?;
				index.fmt(f, context)?;
				"]".fmt(f)
			}
		}
	}
}


impl<'a> Display<'a> for Exp {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Var(var) => var.fmt(f, context),

			Self::Nil { .. } => color::Fg(color::Blue, "nil").fmt(f),

			Self::Int { value, .. } => value.fmt(f),

			Self::Str { value, .. } => write!(f, "\"{}\"", value.escape_debug()),

			Self::Call { function, args, .. } => {
				function.fmt(f, context.interner)?;
				"(".fmt(f)?;
				fmt::sep_by(
					args.iter(),
					f,
					|arg, f| arg.fmt(f, context),
					", ",
				)?;
				")".fmt(f)
			}

			Self::BinOp { op, left, right, .. } => {
				"(".fmt(f)?;
				left.fmt(f, context)?;
				write!(f, " {} ", op)?;
				right.fmt(f, context)?;
				")".fmt(f)
			}

			Self::Record { type_name, fields, .. } => {
				type_name.fmt(f, context.interner)?;
				" {".fmt(f)?;
				fmt::sep_by(
					fields.iter(),
					f,
					|field, f| field.fmt(f, context),
					",",
				)?;
				" }".fmt(f)
			}

			Self::Seq { exps, .. } => {
				"(".fmt(f)?;

				let nested = context.indent();
				for exp in exps.iter() {
					step(f, nested)?;
					exp.fmt(f, nested)?;
					";".fmt(f)?;
				}

				step(f, context)?;
				")".fmt(f)
			}

			Self::Assign { target, value, .. } => {
				target.fmt(f, context)?;
				" := ".fmt(f)?;
				value.fmt(f, context)
			}

			Self::If { test, then, otherwise, .. } => {
				color::Fg(color::Yellow, "if ").fmt(f)?;
				test.fmt(f, context)?;
				color::Fg(color::Yellow, " then ").fmt(f)?;
				then.fmt(f, context)?;

				if let Some(otherwise) = otherwise {
					color::Fg(color::Yellow, " else ").fmt(f)?;
					otherwise.fmt(f, context)?;
				}

				Ok(())
			}

			Self::While { test, body, .. } => {
				color::Fg(color::Yellow, "while ").fmt(f)?;
				test.fmt(f, context)?;
				color::Fg(color::Yellow, " do ").fmt(f)?;
				body.fmt(f, context.indent())
			}

			Self::For { var, lo, hi, body, .. } => {
				color::Fg(color::Yellow, "for ").fmt(f)?;
				var.fmt(f, context.interner)?;
				" := ".fmt(f)?;
				lo.fmt(f, context)?;
				color::Fg(color::Yellow, " to ").fmt(f)?;
				hi.fmt(f, context)?;
				color::Fg(color::Yellow, " do ").fmt(f)?;
				body.fmt(f, context.indent())
			}

			Self::Break { .. } => color::Fg(color::Yellow, "break").fmt(f),

			Self::Let { decs, body, .. } => {
				color::Fg(color::Yellow, "let").fmt(f)?;

				let nested = context.indent();
				for dec in decs.iter() {
					step(f, nested)?;
					dec.fmt(f, nested)?;
				}

				step(f, context)?;
				color::Fg(color::Yellow, "in").fmt(f)?;
				step(f, nested)?;
				body.fmt(f, nested)?;
				step(f, context)?;
				color::Fg(color::Yellow, "end").fmt(f)
			}

			Self::Array { type_name, size, init, .. } => {
				type_name.fmt(f, context.interner)?;
				" [".fmt(f)?;
				size.fmt(f, context)?;
				"] ".fmt(f)?;
				color::Fg(color::Yellow, "of ").fmt(f)?;
				init.fmt(f, context)
			}
		}
	}
}


impl<'a> Display<'a> for FieldInit {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		" ".fmt(f)?;
		self.name.fmt(f, context.interner)?;
		" = ".fmt(f)?;
		self.value.fmt(f, context)
	}
}


impl<'a> Display<'a> for Dec {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Var { name, type_name, init, .. } => {
				color::Fg(color::Yellow, "var ").fmt(f)?;
				name.fmt(f, context.interner)?;

				if let Some(type_name) = type_name {
					": ".fmt(f)?;
					type_name.fmt(f, context.interner)?;
				}

				" := ".fmt(f)?;
				init.fmt(f, context)
			}

			Self::Types { decs, .. } => fmt::sep_by(
				decs.iter(),
				f,
				|dec, f| dec.fmt(f, context),
				"\n",
			),

			Self::Functions { decs, .. } => fmt::sep_by(
				decs.iter(),
				f,
				|dec, f| dec.fmt(f, context),
				"\n",
			),
		}
	}
}


impl<'a> Display<'a> for TypeDec {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		color::Fg(color::Yellow, "type ").fmt(f)?;
		self.name.fmt(f, context.interner)?;
		" = ".fmt(f)?;
		self.ty.fmt(f, context)
	}
}


impl<'a> Display<'a> for Ty {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Name { name, .. } => name.fmt(f, context.interner),

			Self::Record { fields, .. } => {
				"{ ".fmt(f)?;
				fmt::sep_by(
					fields.iter(),
					f,
					|field, f| field.fmt(f, context),
					", ",
				)?;
				" }".fmt(f)
			}

			Self::Array { element, .. } => {
				color::Fg(color::Yellow, "array of ").fmt(f)?;
				element.fmt(f, context.interner)
			}
		}
	}
}


impl<'a> Display<'a> for Field {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		self.name.fmt(f, context.interner)?;
		": ".fmt(f)?;
		self.type_name.fmt(f, context.interner)
	}
}


impl<'a> Display<'a> for FunDec {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		color::Fg(color::Yellow, "function ").fmt(f)?;
		self.name.fmt(f, context.interner)?;
		"(".fmt(f)?;
		fmt::sep_by(
			self.params.iter(),
			f,
			|param, f| param.fmt(f, context),
			", ",
		)?;
		")".fmt(f)?;

		if let Some(result) = &self.result {
			": ".fmt(f)?;
			result.fmt(f, context.interner)?;
		}

		" = ".fmt(f)?;
		self.body.fmt(f, context.indent())
	}
}
