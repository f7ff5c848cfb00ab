pub mod fmt;

use super::SourcePos;
pub use crate::symbol::Symbol;


/// Binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
	Add, // +
	Sub, // -
	Mul, // *
	Div, // /

	Eq, // =
	Ne, // <>
	Lt, // <
	Le, // <=
	Gt, // >
	Ge, // >=

	And, // &
	Or,  // |
}


/// L-values: a simple variable, or a chain of field accesses and subscripts.
#[derive(Debug)]
pub enum Var {
	Simple {
		name: Symbol,
		pos: SourcePos,
	},
	/// Field access (record.field).
	Field {
		parent: Box<Var>,
		name: Symbol,
		pos: SourcePos,
	},
	/// Subscript access (array[index]).
	Subscript {
		array: Box<Var>,
		index: Box<Exp>,
		pos: SourcePos,
	},
}


impl Var {
	pub fn pos(&self) -> SourcePos {
		match self {
			Self::Simple { pos, .. } => *pos,
			Self::Field { pos, .. } => *pos,
			Self::Subscript { pos, .. } => *pos,
		}
	}
}


/// Expressions of all kinds in the language. A whole program is a single expression.
#[derive(Debug)]
pub enum Exp {
	Var(Var),
	Nil {
		pos: SourcePos,
	},
	Int {
		value: i64,
		pos: SourcePos,
	},
	Str {
		value: Box<str>,
		pos: SourcePos,
	},
	Call {
		function: Symbol,
		args: Box<[Exp]>,
		pos: SourcePos,
	},
	BinOp {
		op: BinOp,
		left: Box<Exp>,
		right: Box<Exp>,
		pos: SourcePos,
	},
	/// Record construction: `T { field = value, ... }`.
	Record {
		type_name: Symbol,
		fields: Box<[FieldInit]>,
		pos: SourcePos,
	},
	/// A parenthesized sequence of expressions, valued as its last element.
	Seq {
		exps: Box<[Exp]>,
		pos: SourcePos,
	},
	Assign {
		target: Var,
		value: Box<Exp>,
		pos: SourcePos,
	},
	/// Conditional, with optional else branch.
	If {
		test: Box<Exp>,
		then: Box<Exp>,
		otherwise: Option<Box<Exp>>,
		pos: SourcePos,
	},
	While {
		test: Box<Exp>,
		body: Box<Exp>,
		pos: SourcePos,
	},
	/// For loop. Also introduces an identifier, scoped to the body.
	For {
		var: Symbol,
		lo: Box<Exp>,
		hi: Box<Exp>,
		body: Box<Exp>,
		pos: SourcePos,
	},
	Break {
		pos: SourcePos,
	},
	/// Let expression: declarations scoped to the body.
	Let {
		decs: Box<[Dec]>,
		body: Box<Exp>,
		pos: SourcePos,
	},
	/// Array construction: `T [size] of init`.
	Array {
		type_name: Symbol,
		size: Box<Exp>,
		init: Box<Exp>,
		pos: SourcePos,
	},
}


impl Exp {
	pub fn pos(&self) -> SourcePos {
		match self {
			Self::Var(var) => var.pos(),
			Self::Nil { pos } => *pos,
			Self::Int { pos, .. } => *pos,
			Self::Str { pos, .. } => *pos,
			Self::Call { pos, .. } => *pos,
			Self::BinOp { pos, .. } => *pos,
			Self::Record { pos, .. } => *pos,
			Self::Seq { pos, .. } => *pos,
			Self::Assign { pos, .. } => *pos,
			Self::If { pos, .. } => *pos,
			Self::While { pos, .. } => *pos,
			Self::For { pos, .. } => *pos,
			Self::Break { pos } => *pos,
			Self::Let { pos, .. } => *pos,
			Self::Array { pos, .. } => *pos,
		}
	}
}


/// A single `field = value` item in a record construction.
#[derive(Debug)]
pub struct FieldInit {
	pub name: Symbol,
	pub value: Exp,
	pub pos: SourcePos,
}


/// Declarations, as they appear inside a let.
/// Consecutive type declarations and consecutive function declarations are grouped by
/// the parser, so that members of a group may refer to each other.
#[derive(Debug)]
pub enum Dec {
	Var {
		name: Symbol,
		/// Optional type annotation.
		type_name: Option<Symbol>,
		init: Exp,
		pos: SourcePos,
	},
	Types {
		decs: Box<[TypeDec]>,
		pos: SourcePos,
	},
	Functions {
		decs: Box<[FunDec]>,
		pos: SourcePos,
	},
}


/// A single `type name = ty` declaration.
#[derive(Debug)]
pub struct TypeDec {
	pub name: Symbol,
	pub ty: Ty,
	pub pos: SourcePos,
}


/// The right hand side of a type declaration.
#[derive(Debug)]
pub enum Ty {
	/// An alias for another named type.
	Name {
		name: Symbol,
		pos: SourcePos,
	},
	Record {
		fields: Box<[Field]>,
		pos: SourcePos,
	},
	Array {
		element: Symbol,
		pos: SourcePos,
	},
}


/// A typed name: a record field or a function parameter.
#[derive(Debug)]
pub struct Field {
	pub name: Symbol,
	pub type_name: Symbol,
	pub pos: SourcePos,
}


/// A single function declaration. A missing result annotation denotes a procedure.
#[derive(Debug)]
pub struct FunDec {
	pub name: Symbol,
	pub params: Box<[Field]>,
	pub result: Option<Symbol>,
	pub body: Exp,
	pub pos: SourcePos,
}
