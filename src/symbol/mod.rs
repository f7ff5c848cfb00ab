mod fmt;

use intaglio::{Symbol as SymbolInner, SymbolTable};


/// A symbol is a reference to an identifier stored in the symbol interner.
/// Two occurrences of the same identifier always yield the same symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Symbol(SymbolInner);


/// The default symbol is a dummy symbol, which will yield "<invalid symbol>" when
/// resolved.
impl Default for Symbol {
	fn default() -> Self {
		Self(SymbolInner::new(0))
	}
}


impl From<Symbol> for usize {
	fn from(symbol: Symbol) -> usize {
		symbol.0.id() as usize
	}
}


/// A symbol interner, used to store identifiers and type names.
#[derive(Debug)]
pub struct Interner(SymbolTable);


impl Interner {
	/// Create a new interner. Please note that this allocates memory even if no symbols
	/// are inserted.
	pub fn new() -> Self {
		let mut interner = SymbolTable::new();
		interner
			.intern("<invalid symbol>")
			.expect("failed to intern symbol");
		Self(interner)
	}


	/// Get the symbol for an identifier, if it has been interned.
	#[cfg(test)]
	pub fn get<T>(&self, value: T) -> Option<Symbol>
	where
		T: AsRef<str>,
	{
		self.0
			.check_interned(value.as_ref())
			.map(Symbol)
	}


	/// Get the symbol for an identifier. The identifier is interned if needed.
	pub fn get_or_intern<T>(&mut self, value: T) -> Symbol
	where
		T: Into<String>,
	{
		Symbol(
			self.0
				.intern(value.into())
				.expect("failed to intern symbol")
		)
	}


	/// Resolve the identifier for a symbol.
	pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
		self.0.get(symbol.0)
	}


	/// Get the number of interned identifiers.
	/// This does not include the dummy symbol.
	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.0.len() - 1
	}
}


impl Default for Interner {
	fn default() -> Self {
		Self::new()
	}
}
