use std::fmt::Display as _;

use super::{Type, TypeArena, TypeId};
use crate::{
	fmt::{self, Display},
	symbol,
	term::color,
};


/// The context for displaying types.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
	pub interner: &'a symbol::Interner,
	pub types: &'a TypeArena,
}


/// Recursive record types would print forever, so nested composite types are
/// abbreviated to their kind.
fn shallow(f: &mut std::fmt::Formatter, ty: &Type, context: Context) -> std::fmt::Result {
	match ty {
		Type::Int => color::Fg(color::Blue, "int").fmt(f),
		Type::String => color::Fg(color::Blue, "string").fmt(f),
		Type::Nil => color::Fg(color::Blue, "nil").fmt(f),
		Type::Void => color::Fg(color::Blue, "void").fmt(f),
		Type::Array(_) => color::Fg(color::Blue, "array").fmt(f),
		Type::Record(_) => color::Fg(color::Blue, "record").fmt(f),
		Type::Name { name, .. } => name.fmt(f, context.interner),
	}
}


impl<'a> Display<'a> for TypeId {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match context.types.get(*self) {
			Type::Array(element) => {
				color::Fg(color::Blue, "array of ").fmt(f)?;
				shallow(f, context.types.get(*element), context)
			}

			Type::Record(fields) => {
				"{ ".fmt(f)?;
				fmt::sep_by(
					fields.iter(),
					f,
					|field, f| {
						field.name.fmt(f, context.interner)?;
						": ".fmt(f)?;
						shallow(f, context.types.get(field.ty), context)
					},
					", ",
				)?;
				" }".fmt(f)
			}

			ty => shallow(f, ty, context),
		}
	}
}
