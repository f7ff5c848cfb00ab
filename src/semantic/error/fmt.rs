use std::fmt::Display as _;

use super::{Error, ErrorKind, Errors};
use crate::{
	fmt::{self, Display},
	symbol,
	term::color,
};


/// Context for displaying errors.
#[derive(Debug, Copy, Clone)]
pub struct ErrorsDisplayContext<'a> {
	/// Max number of displayed errors.
	pub max_errors: Option<usize>,
	/// Symbol interner.
	pub interner: &'a symbol::Interner,
}


impl<'a> Display<'a> for ErrorKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::UndefinedVariable(symbol) => {
				"undefined variable '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::UndefinedFunction(symbol) => {
				"undefined function '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::UndefinedType(symbol) => {
				"undefined type '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::FieldOfNonRecord => write!(f, "field access on non-record value"),

			Self::SubscriptOfNonArray => write!(f, "subscript on non-array value"),

			Self::NoSuchField(symbol) => {
				"no such field '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::NonIntegerIndex => write!(f, "subscript index is not an integer"),

			Self::NonIntegerOperand => write!(f, "operand is not an integer"),

			Self::ComparisonMismatch => write!(f, "comparison of incompatible types"),

			Self::AssignMismatch => write!(f, "assignment of incompatible type"),

			Self::BranchMismatch => write!(f, "if branches have incompatible types"),

			Self::ValuedThenBranch => write!(f, "if without else must not produce a value"),

			Self::NonIntegerTest => write!(f, "test expression is not an integer"),

			Self::ValuedLoopBody => write!(f, "loop body must not produce a value"),

			Self::NonIntegerBound => write!(f, "loop bound is not an integer"),

			Self::NonIntegerArraySize => write!(f, "array size is not an integer"),

			Self::BreakOutsideLoop => write!(f, "break statement outside loop"),

			Self::TooFewArguments(symbol) => {
				"too few arguments to function '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::TooManyArguments(symbol) => {
				"too many arguments to function '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::ArgumentMismatch => write!(f, "argument of incompatible type"),

			Self::NotARecordType(symbol) => {
				"'".fmt(f)?;
				symbol.fmt(f, context)?;
				"' is not a record type".fmt(f)
			}

			Self::NotAnArrayType(symbol) => {
				"'".fmt(f)?;
				symbol.fmt(f, context)?;
				"' is not an array type".fmt(f)
			}

			Self::UnexpectedField { found, expected } => {
				"unexpected field '".fmt(f)?;
				found.fmt(f, context)?;
				"', expected '".fmt(f)?;
				expected.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::MissingField(symbol) => {
				"missing field '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::SurplusField(symbol) => {
				"surplus field '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::FieldMismatch(symbol) => {
				"incompatible type for field '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::ArrayInitMismatch => {
				write!(f, "array initializer of incompatible type")
			}

			Self::DeclaredTypeMismatch => {
				write!(f, "initializer does not match declared type")
			}

			Self::NilInitializer => {
				write!(f, "nil initializer requires a record type annotation")
			}

			Self::BodyTypeMismatch(symbol) => {
				"body of function '".fmt(f)?;
				symbol.fmt(f, context)?;
				"' does not match declared result type".fmt(f)
			}

			Self::TypeCycle(symbol) => {
				"invalid cycle in declaration of type '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::UnresolvedField(symbol) => {
				"unresolved type for field '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		write!(f, "{}: {} - ", color::Fg(color::Red, "Error"), self.pos)?;
		self.kind.fmt(f, context)
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}


impl std::error::Error for Error {}


impl<'a> Display<'a> for Errors {
	type Context = ErrorsDisplayContext<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		for (ix, error) in self.0.iter().enumerate() {
			if let Some(max) = context.max_errors {
				if max <= ix {
					writeln!(
						f,
						"{} {}",
						color::Fg(color::Red, self.0.len() - max),
						color::Fg(color::Red, "more supressed semantic errors"),
					)?;

					break;
				}
			}

			writeln!(f, "{}", fmt::Show(error, context.interner))?;
		}

		Ok(())
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Errors {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for error in self.0.iter() {
			writeln!(f, "{}", error)?;
		}

		Ok(())
	}
}


impl std::error::Error for Errors {}
