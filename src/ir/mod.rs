pub mod fmt;
pub mod frame;
pub mod translate;

use crate::semantic::types::INT_SIZE;
use crate::symbol::Symbol;
use crate::syntax::ast;
use frame::Frame;


/// A code label, unique within one compilation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Label(pub u32);


/// A virtual register, unique within one compilation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Temp(pub u32);


/// A handle to a function in the translator's arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FunctionId(pub u32);


impl FunctionId {
	pub(crate) fn index(self) -> usize {
		self.0 as usize
	}
}


/// A translated function: its frame, its position in the static nesting tree, and its
/// body as a statement sequence.
#[derive(Debug)]
pub struct Function {
	pub name: Symbol,
	pub frame: Frame,
	pub parent: Option<FunctionId>,
	pub children: Vec<FunctionId>,
	pub body: Vec<Stm>,
}


/// Arithmetic operators. Division is a distinct expression because it alone may trap,
/// which later stages care about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithOp {
	Add,
	Sub,
	Mul,
}


impl From<ast::BinOp> for ArithOp {
	fn from(op: ast::BinOp) -> Self {
		match op {
			ast::BinOp::Add => Self::Add,
			ast::BinOp::Sub => Self::Sub,
			ast::BinOp::Mul => Self::Mul,
			op => panic!("invalid arithmetic operator: {}", op),
		}
	}
}


/// Comparison and logical operators, all producing an integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelOp {
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
	And,
	Or,
}


impl From<ast::BinOp> for RelOp {
	fn from(op: ast::BinOp) -> Self {
		match op {
			ast::BinOp::Eq => Self::Eq,
			ast::BinOp::Ne => Self::Ne,
			ast::BinOp::Lt => Self::Lt,
			ast::BinOp::Le => Self::Le,
			ast::BinOp::Gt => Self::Gt,
			ast::BinOp::Ge => Self::Ge,
			ast::BinOp::And => Self::And,
			ast::BinOp::Or => Self::Or,
			op => panic!("invalid relational operator: {}", op),
		}
	}
}


/// A statement: a computation executed for effect.
#[derive(Debug)]
pub enum Stm {
	Assign {
		value: Exp,
		target: Exp,
	},
	/// Call of a procedure, discarding any result.
	ProcCall {
		function: Symbol,
		args: Vec<Exp>,
	},
	Seq(Vec<Stm>),
	If {
		test: Exp,
		/// Branched to when the test is false.
		skip: Label,
		then: Box<Stm>,
	},
	IfElse {
		test: Exp,
		otherwise_label: Label,
		then: Box<Stm>,
		otherwise: Box<Stm>,
		join: Label,
	},
	While {
		test_label: Label,
		test: Exp,
		/// Branched to when the test fails, and the target of breaks in the body.
		exit: Label,
		body: Box<Stm>,
	},
	For {
		var: Exp,
		lo: Exp,
		hi: Exp,
		test_label: Label,
		exit: Label,
		body: Box<Stm>,
	},
	/// Unconditional jump to the exit label of the innermost enclosing loop.
	Break(Label),
	/// An expression evaluated for effect.
	Exp(Exp),
}


/// An expression: a computation producing a value of the given byte size, in the given
/// virtual register. Expressions that denote memory locations directly carry no
/// register.
#[derive(Debug)]
pub struct Exp {
	pub size: u32,
	pub temp: Option<Temp>,
	pub kind: ExpKind,
}


#[derive(Debug)]
pub enum ExpKind {
	Num(i64),
	/// A string literal, placed in static storage at the given label.
	Str {
		value: Box<str>,
		label: Label,
	},
	/// A variable's location: frame of the given static nesting level, at the given
	/// byte offset.
	Mem {
		name: Symbol,
		nesting_level: u32,
		offset: u32,
	},
	/// The value fetched from a location.
	Load(Box<Exp>),
	Field {
		base: Box<Exp>,
		name: Symbol,
		offset: u32,
	},
	Subscript {
		base: Box<Exp>,
		index: Box<Exp>,
	},
	/// Record construction; one initializer per field, in declaration order.
	Record(Vec<Exp>),
	/// Array construction from an element initializer.
	Array(Box<Exp>),
	Arith {
		op: ArithOp,
		left: Box<Exp>,
		right: Box<Exp>,
	},
	Div {
		left: Box<Exp>,
		right: Box<Exp>,
	},
	Rel {
		op: RelOp,
		left: Box<Exp>,
		right: Box<Exp>,
	},
	If {
		test: Box<Exp>,
		skip: Label,
		then: Box<Exp>,
	},
	IfElse {
		test: Box<Exp>,
		otherwise_label: Label,
		then: Box<Exp>,
		otherwise: Box<Exp>,
		join: Label,
	},
	Call {
		function: Symbol,
		args: Vec<Exp>,
	},
	/// A statement sequence whose last assignment leaves the value in the register.
	Seq(Vec<Stm>),
}


impl Exp {
	/// An integer constant. Constants live in no register.
	pub fn num(value: i64) -> Self {
		Self {
			size: INT_SIZE,
			temp: None,
			kind: ExpKind::Num(value),
		}
	}


	/// A variable's location.
	pub fn mem(name: Symbol, nesting_level: u32, offset: u32, size: u32) -> Self {
		Self {
			size,
			temp: None,
			kind: ExpKind::Mem { name, nesting_level, offset },
		}
	}


	/// An arithmetic operation. The result reuses the right operand's register.
	pub fn arith(op: ArithOp, left: Exp, right: Exp) -> Self {
		Self {
			size: right.size,
			temp: right.temp,
			kind: ExpKind::Arith {
				op,
				left: Box::new(left),
				right: Box::new(right),
			},
		}
	}


	/// A division. The result reuses the right operand's register.
	pub fn div(left: Exp, right: Exp) -> Self {
		Self {
			size: right.size,
			temp: right.temp,
			kind: ExpKind::Div {
				left: Box::new(left),
				right: Box::new(right),
			},
		}
	}


	/// A comparison or logical operation, always an integer.
	pub fn rel(op: RelOp, left: Exp, right: Exp) -> Self {
		Self {
			size: INT_SIZE,
			temp: right.temp,
			kind: ExpKind::Rel {
				op,
				left: Box::new(left),
				right: Box::new(right),
			},
		}
	}
}
