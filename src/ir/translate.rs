use super::frame::Frame;
use super::{Exp, ExpKind, Function, FunctionId, Label, Stm, Temp};
use crate::semantic::types::{TypeId, POINTER_SIZE};
use crate::symbol::Symbol;


/// The mutable translation state of one compilation: label and register counters, the
/// stack of enclosing loop exit labels, and the arena of translated functions.
#[derive(Debug, Default)]
pub struct Translator {
	labels: u32,
	temps: u32,
	loops: Vec<Label>,
	functions: Vec<Function>,
}


impl Translator {
	pub fn new() -> Self {
		Self::default()
	}


	pub fn new_label(&mut self) -> Label {
		let label = Label(self.labels);
		self.labels += 1;
		label
	}


	pub fn new_temp(&mut self) -> Temp {
		let temp = Temp(self.temps);
		self.temps += 1;
		temp
	}


	/// Enter a loop: breaks translated until the matching `pop_loop` target `exit`.
	pub fn push_loop(&mut self, exit: Label) {
		self.loops.push(exit);
	}


	pub fn pop_loop(&mut self) {
		self.loops.pop();
	}


	/// The exit label of the innermost enclosing loop, if any.
	pub fn current_loop(&self) -> Option<Label> {
		self.loops.last().copied()
	}


	/// Allocate a new function with an empty frame at the given nesting level.
	pub fn new_function(&mut self, name: Symbol, nesting_level: u32) -> FunctionId {
		let id = FunctionId(self.functions.len() as u32);

		self.functions.push(Function {
			name,
			frame: Frame::new(nesting_level),
			parent: None,
			children: Vec::new(),
			body: Vec::new(),
		});

		id
	}


	/// Record `child` as a nested function of `parent`, one nesting level deeper.
	pub fn append_child(&mut self, parent: FunctionId, child: FunctionId) {
		let nesting_level = self.functions[parent.index()].frame.nesting_level + 1;

		self.functions[parent.index()].children.push(child);

		let child = &mut self.functions[child.index()];
		child.frame.nesting_level = nesting_level;
		child.parent = Some(parent);
	}


	/// Allocate a parameter slot in the function's frame, returning its byte offset.
	pub fn add_parameter(
		&mut self,
		func: FunctionId,
		name: Symbol,
		ty: TypeId,
		size: u32,
	) -> u32 {
		self.functions[func.index()].frame.add_parameter(name, ty, size)
	}


	/// Allocate a local variable slot in the function's frame, returning its byte
	/// offset.
	pub fn add_local(&mut self, func: FunctionId, name: Symbol, ty: TypeId, size: u32) -> u32 {
		self.functions[func.index()].frame.add_local(name, ty, size)
	}


	/// Append a statement to the function's body, splicing nested sequences so the
	/// body stays flat.
	pub fn append_stm(&mut self, func: FunctionId, stm: Stm) {
		match stm {
			Stm::Seq(stms) => {
				for stm in stms {
					self.append_stm(func, stm);
				}
			}

			stm => self.functions[func.index()].body.push(stm),
		}
	}


	pub fn function(&self, id: FunctionId) -> &Function {
		&self.functions[id.index()]
	}


	pub fn into_functions(self) -> Box<[Function]> {
		self.functions.into()
	}


	/// A string literal, placed at a fresh static label.
	pub fn string(&mut self, value: Box<str>) -> Exp {
		Exp {
			size: POINTER_SIZE,
			temp: Some(self.new_temp()),
			kind: ExpKind::Str { value, label: self.new_label() },
		}
	}


	/// The value fetched from a location, into a fresh register.
	pub fn load(&mut self, location: Exp) -> Exp {
		Exp {
			size: location.size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Load(Box::new(location)),
		}
	}


	/// A record field location.
	pub fn field(&mut self, base: Exp, name: Symbol, size: u32, offset: u32) -> Exp {
		Exp {
			size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Field { base: Box::new(base), name, offset },
		}
	}


	/// An array element location. The size is the element size, which also scales the
	/// index.
	pub fn subscript(&mut self, base: Exp, index: Exp, element_size: u32) -> Exp {
		Exp {
			size: element_size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Subscript {
				base: Box::new(base),
				index: Box::new(index),
			},
		}
	}


	/// Record construction.
	pub fn record(&mut self, size: u32, fields: Vec<Exp>) -> Exp {
		Exp {
			size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Record(fields),
		}
	}


	/// Array construction.
	pub fn array(&mut self, size: u32, init: Exp) -> Exp {
		Exp {
			size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Array(Box::new(init)),
		}
	}


	/// Call of a value-producing function.
	pub fn call(&mut self, function: Symbol, args: Vec<Exp>, result_size: u32) -> Exp {
		Exp {
			size: result_size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Call { function, args },
		}
	}


	/// A valued conditional without an else branch.
	pub fn if_exp(&mut self, test: Exp, then: Exp) -> Exp {
		Exp {
			size: then.size,
			temp: then.temp,
			kind: ExpKind::If {
				test: Box::new(test),
				skip: self.new_label(),
				then: Box::new(then),
			},
		}
	}


	/// A valued conditional. The joined result lands in a fresh register.
	pub fn if_else_exp(&mut self, test: Exp, then: Exp, otherwise: Exp) -> Exp {
		Exp {
			size: then.size,
			temp: Some(self.new_temp()),
			kind: ExpKind::IfElse {
				test: Box::new(test),
				otherwise_label: self.new_label(),
				then: Box::new(then),
				otherwise: Box::new(otherwise),
				join: self.new_label(),
			},
		}
	}


	/// A conditional statement without an else branch.
	pub fn if_stm(&mut self, test: Exp, then: Stm) -> Stm {
		Stm::If {
			test,
			skip: self.new_label(),
			then: Box::new(then),
		}
	}


	/// A conditional statement with both branches.
	pub fn if_else_stm(&mut self, test: Exp, then: Stm, otherwise: Stm) -> Stm {
		Stm::IfElse {
			test,
			otherwise_label: self.new_label(),
			then: Box::new(then),
			otherwise: Box::new(otherwise),
			join: self.new_label(),
		}
	}


	/// A statement as a value-producing sequence, leaving its result of the given size
	/// in a fresh register.
	pub fn stm_to_seq_exp(&mut self, stm: Stm, size: u32) -> Exp {
		let stms = match stm {
			Stm::Seq(stms) => stms,
			stm => vec![stm],
		};

		Exp {
			size,
			temp: Some(self.new_temp()),
			kind: ExpKind::Seq(stms),
		}
	}
}
