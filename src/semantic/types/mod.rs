pub mod fmt;

use crate::symbol::Symbol;


/// Byte size of an integer.
pub const INT_SIZE: u32 = 4;
/// Byte size of pointer-represented values (strings, records, arrays).
pub const POINTER_SIZE: u32 = 8;


/// A handle to a type in the arena. Record and array types are compared by identity:
/// two ids are the same type exactly when they are equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TypeId(u32);


impl TypeId {
	pub const INT: TypeId = TypeId(0);
	pub const STRING: TypeId = TypeId(1);
	pub const NIL: TypeId = TypeId(2);
	pub const VOID: TypeId = TypeId(3);


	fn index(self) -> usize {
		self.0 as usize
	}
}


/// A named, typed record field.
#[derive(Debug)]
pub struct Field {
	pub name: Symbol,
	pub ty: TypeId,
}


/// The types of the language.
#[derive(Debug)]
pub enum Type {
	Int,
	String,
	/// The type of the `nil` expression, compatible with every record type.
	Nil,
	/// The type of expressions that produce no value.
	Void,
	Array(TypeId),
	Record(Vec<Field>),
	/// A reference to a named type, possibly not yet resolved. This is what enables
	/// mutually recursive type declarations: the target is patched once known.
	Name {
		name: Symbol,
		target: Option<TypeId>,
	},
}


/// The arena owning every type of one compilation. The four primitive types are
/// pre-seeded as singletons; arrays, records and names are allocated per declaration.
#[derive(Debug)]
pub struct TypeArena(Vec<Type>);


impl Default for TypeArena {
	fn default() -> Self {
		Self(vec![Type::Int, Type::String, Type::Nil, Type::Void])
	}
}


impl TypeArena {
	pub fn new() -> Self {
		Self::default()
	}


	/// Allocate a new type, returning its handle.
	pub fn alloc(&mut self, ty: Type) -> TypeId {
		let id = TypeId(self.0.len() as u32);
		self.0.push(ty);
		id
	}


	pub fn get(&self, id: TypeId) -> &Type {
		&self.0[id.index()]
	}


	/// Iterate over all allocated types.
	pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
		self.0
			.iter()
			.enumerate()
			.map(|(ix, ty)| (TypeId(ix as u32), ty))
	}


	/// Follow name references to the first non-name type. Stops at a name that was
	/// never patched; the analyzer reports such declarations as invalid cycles, so
	/// this never diverges on analyzer-produced types.
	pub fn actual(&self, id: TypeId) -> TypeId {
		let mut id = id;

		while let Type::Name { target: Some(target), .. } = self.get(id) {
			id = *target;
		}

		id
	}


	/// The byte size of a value of the given type. Name references are not followed;
	/// resolve with `actual` first where that matters.
	pub fn size_of(&self, id: TypeId) -> u32 {
		match self.get(id) {
			Type::Int => INT_SIZE,
			Type::String | Type::Array(_) | Type::Record(_) => POINTER_SIZE,
			Type::Nil | Type::Void | Type::Name { .. } => 0,
		}
	}


	/// Whether two types agree for assignment and comparison purposes: identity,
	/// except that nil agrees with every record type and vice versa.
	pub fn agree(&self, t1: TypeId, t2: TypeId) -> bool {
		let record = matches!(self.get(t1), Type::Record(_))
			|| matches!(self.get(t2), Type::Record(_));

		if record {
			t1 == t2
				|| matches!(self.get(t1), Type::Nil)
				|| matches!(self.get(t2), Type::Nil)
		} else {
			t1 == t2
		}
	}


	/// Patch an unresolved name reference with its target.
	/// Panics if `id` is not a name type.
	pub fn resolve_name(&mut self, id: TypeId, target: TypeId) {
		match &mut self.0[id.index()] {
			Type::Name { target: slot, .. } => *slot = Some(target),
			other => panic!("attempt to resolve non-name type: {:?}", other),
		}
	}
}
