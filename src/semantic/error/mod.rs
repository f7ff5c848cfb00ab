mod fmt;

use crate::symbol::Symbol;
use crate::syntax::SourcePos;
pub use fmt::ErrorsDisplayContext;


/// The collected semantic errors of one compilation. Analysis does not stop at the
/// first error; a non-empty collection means the compilation failed, even though an IR
/// tree was produced.
#[derive(Debug, Default)]
pub struct Errors(pub Vec<Error>);


impl Errors {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}


impl IntoIterator for Errors {
	type Item = Error;
	type IntoIter = std::vec::IntoIter<Error>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}


impl Extend<Error> for Errors {
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = Error>,
	{
		self.0.extend(iter)
	}
}


/// The kind of semantic error.
#[derive(Debug)]
pub enum ErrorKind {
	/// Use of a variable that is not in scope.
	UndefinedVariable(Symbol),
	/// Call of a function that is not in scope.
	UndefinedFunction(Symbol),
	/// Use of a type name that is not in scope.
	UndefinedType(Symbol),
	/// Field access on a value that is not a record.
	FieldOfNonRecord,
	/// Subscript on a value that is not an array.
	SubscriptOfNonArray,
	/// Field access with a name the record type does not declare.
	NoSuchField(Symbol),
	/// Non-integer subscript index.
	NonIntegerIndex,
	/// Non-integer operand of an arithmetic, ordering or logical operator.
	NonIntegerOperand,
	/// Operands of `=` or `<>` with disagreeing types.
	ComparisonMismatch,
	/// Assignment with disagreeing target and value types.
	AssignMismatch,
	/// If-else whose branch types disagree.
	BranchMismatch,
	/// If without else whose then branch produces a value.
	ValuedThenBranch,
	/// Non-integer conditional or loop test.
	NonIntegerTest,
	/// Loop body that produces a value.
	ValuedLoopBody,
	/// Non-integer for-loop bound.
	NonIntegerBound,
	/// Non-integer array size expression.
	NonIntegerArraySize,
	/// Break statement outside any loop.
	BreakOutsideLoop,
	/// Call with fewer arguments than the function's parameters.
	TooFewArguments(Symbol),
	/// Call with more arguments than the function's parameters.
	TooManyArguments(Symbol),
	/// Call argument whose type disagrees with the parameter's.
	ArgumentMismatch,
	/// Record construction naming a type that is not a record type.
	NotARecordType(Symbol),
	/// Array construction naming a type that is not an array type.
	NotAnArrayType(Symbol),
	/// Record construction field out of declaration order.
	UnexpectedField { found: Symbol, expected: Symbol },
	/// Record construction missing a declared field.
	MissingField(Symbol),
	/// Record construction with a surplus field.
	SurplusField(Symbol),
	/// Record construction field value whose type disagrees with the declaration.
	FieldMismatch(Symbol),
	/// Array initializer whose type disagrees with the element type.
	ArrayInitMismatch,
	/// Variable initializer whose type disagrees with the declared annotation.
	DeclaredTypeMismatch,
	/// Nil initializer without a record type annotation.
	NilInitializer,
	/// Function body whose type disagrees with the declared result type.
	BodyTypeMismatch(Symbol),
	/// A type declaration that never resolves to an actual type.
	TypeCycle(Symbol),
	/// A record field whose type name cannot be resolved.
	UnresolvedField(Symbol),
}


/// A semantic error.
#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	pub pos: SourcePos,
}


impl Error {
	pub fn undefined_variable(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::UndefinedVariable(name), pos }
	}


	pub fn undefined_function(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::UndefinedFunction(name), pos }
	}


	pub fn undefined_type(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::UndefinedType(name), pos }
	}


	pub fn field_of_non_record(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::FieldOfNonRecord, pos }
	}


	pub fn subscript_of_non_array(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::SubscriptOfNonArray, pos }
	}


	pub fn no_such_field(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NoSuchField(name), pos }
	}


	pub fn non_integer_index(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NonIntegerIndex, pos }
	}


	pub fn non_integer_operand(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NonIntegerOperand, pos }
	}


	pub fn comparison_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::ComparisonMismatch, pos }
	}


	pub fn assign_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::AssignMismatch, pos }
	}


	pub fn branch_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::BranchMismatch, pos }
	}


	pub fn valued_then_branch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::ValuedThenBranch, pos }
	}


	pub fn non_integer_test(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NonIntegerTest, pos }
	}


	pub fn valued_loop_body(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::ValuedLoopBody, pos }
	}


	pub fn non_integer_bound(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NonIntegerBound, pos }
	}


	pub fn non_integer_array_size(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NonIntegerArraySize, pos }
	}


	pub fn break_outside_loop(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::BreakOutsideLoop, pos }
	}


	pub fn too_few_arguments(function: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::TooFewArguments(function), pos }
	}


	pub fn too_many_arguments(function: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::TooManyArguments(function), pos }
	}


	pub fn argument_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::ArgumentMismatch, pos }
	}


	pub fn not_a_record_type(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NotARecordType(name), pos }
	}


	pub fn not_an_array_type(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NotAnArrayType(name), pos }
	}


	pub fn unexpected_field(found: Symbol, expected: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::UnexpectedField { found, expected }, pos }
	}


	pub fn missing_field(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::MissingField(name), pos }
	}


	pub fn surplus_field(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::SurplusField(name), pos }
	}


	pub fn field_mismatch(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::FieldMismatch(name), pos }
	}


	pub fn array_init_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::ArrayInitMismatch, pos }
	}


	pub fn declared_type_mismatch(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::DeclaredTypeMismatch, pos }
	}


	pub fn nil_initializer(pos: SourcePos) -> Self {
		Self { kind: ErrorKind::NilInitializer, pos }
	}


	pub fn body_type_mismatch(function: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::BodyTypeMismatch(function), pos }
	}


	pub fn type_cycle(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::TypeCycle(name), pos }
	}


	pub fn unresolved_field(name: Symbol, pos: SourcePos) -> Self {
		Self { kind: ErrorKind::UnresolvedField(name), pos }
	}
}
