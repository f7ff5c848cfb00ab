use crate::semantic::types::TypeId;
use crate::symbol::Symbol;


/// A named slot in a frame.
#[derive(Debug)]
pub struct Slot {
	pub name: Symbol,
	pub ty: TypeId,
}


/// The storage layout of one function: its parameters and local variables, laid out
/// contiguously from offset zero.
#[derive(Debug)]
pub struct Frame {
	pub nesting_level: u32,
	/// Parameter slots, in declaration order.
	pub parameters: Vec<Slot>,
	/// Local variable slots, in declaration order.
	pub locals: Vec<Slot>,
	/// One past the last allocated byte.
	pub end: u32,
}


impl Frame {
	pub fn new(nesting_level: u32) -> Self {
		Self {
			nesting_level,
			parameters: Vec::new(),
			locals: Vec::new(),
			end: 0,
		}
	}


	/// Allocate a parameter slot, returning its byte offset.
	pub fn add_parameter(&mut self, name: Symbol, ty: TypeId, size: u32) -> u32 {
		let offset = self.end;
		self.parameters.push(Slot { name, ty });
		self.end += size;
		offset
	}


	/// Allocate a local variable slot, returning its byte offset.
	pub fn add_local(&mut self, name: Symbol, ty: TypeId, size: u32) -> u32 {
		let offset = self.end;
		self.locals.push(Slot { name, ty });
		self.end += size;
		offset
	}
}
