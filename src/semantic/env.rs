use super::scope::ScopedTable;
use super::types::TypeId;
use crate::symbol::{Interner, Symbol};


/// An entry in the value environment: a variable's storage location, or a function
/// signature.
#[derive(Debug, Clone)]
pub enum Entry {
	Var {
		ty: TypeId,
		/// Static nesting level of the owning function.
		nesting_level: u32,
		/// Byte offset of the variable's slot in the owning frame.
		offset: u32,
	},
	Fun {
		formals: Box<[TypeId]>,
		result: TypeId,
	},
}


/// The type environment: type names to types.
pub type TypeEnv = ScopedTable<Symbol, TypeId>;

/// The value environment: identifiers to variables and functions.
pub type ValueEnv = ScopedTable<Symbol, Entry>;


/// The base type environment, binding the primitive type names.
pub fn base_tenv(interner: &mut Interner) -> TypeEnv {
	let mut tenv = ScopedTable::new();

	tenv.enter(interner.get_or_intern("int"), TypeId::INT);
	tenv.enter(interner.get_or_intern("string"), TypeId::STRING);

	tenv
}


/// The base value environment, binding the built-in procedures.
pub fn base_venv(interner: &mut Interner) -> ValueEnv {
	let mut venv = ScopedTable::new();

	let builtins: &[(&str, &[TypeId], TypeId)] = &[
		("print", &[TypeId::STRING], TypeId::VOID),
		("flush", &[], TypeId::VOID),
		("getchar", &[], TypeId::STRING),
		("ord", &[TypeId::STRING], TypeId::INT),
		("chr", &[TypeId::INT], TypeId::STRING),
		("size", &[TypeId::STRING], TypeId::INT),
		("substring", &[TypeId::STRING, TypeId::INT, TypeId::INT], TypeId::STRING),
		("concat", &[TypeId::STRING, TypeId::STRING], TypeId::STRING),
		("not", &[TypeId::INT], TypeId::INT),
		("exit", &[TypeId::INT], TypeId::VOID),
	];

	for &(name, formals, result) in builtins {
		venv.enter(
			interner.get_or_intern(name),
			Entry::Fun { formals: formals.into(), result },
		);
	}

	venv
}
