use std::collections::HashMap;
use std::hash::Hash;


/// A mapping with nested scopes. Entering a binding shadows, but never deletes, any
/// previous binding of the same key; ending a scope removes exactly the bindings made
/// since the matching `begin_scope`, re-exposing whatever they shadowed.
///
/// Implemented as a map plus an undo log, so ending a scope costs proportionally to
/// the bindings made in that scope, not to the size of the table.
#[derive(Debug)]
pub struct ScopedTable<K, V> {
	map: HashMap<K, V>,
	log: Vec<Undo<K, V>>,
}


/// An entry in the undo log.
#[derive(Debug)]
enum Undo<K, V> {
	/// A scope marker.
	Mark,
	/// A binding, together with the binding of the same key it shadowed, if any.
	Bind(K, Option<V>),
}


impl<K, V> Default for ScopedTable<K, V> {
	fn default() -> Self {
		Self {
			map: HashMap::new(),
			log: Vec::new(),
		}
	}
}


impl<K, V> ScopedTable<K, V>
where
	K: Hash + Eq + Copy,
{
	pub fn new() -> Self {
		Self::default()
	}


	/// Bind `key` to `value` in the current scope, shadowing any previous binding.
	pub fn enter(&mut self, key: K, value: V) {
		let shadowed = self.map.insert(key, value);
		self.log.push(Undo::Bind(key, shadowed));
	}


	/// Get the most recent visible binding of `key`, if any.
	pub fn look(&self, key: K) -> Option<&V> {
		self.map.get(&key)
	}


	/// Open a nested scope.
	pub fn begin_scope(&mut self) {
		self.log.push(Undo::Mark);
	}


	/// Close the current scope, undoing its bindings in reverse order of insertion.
	/// Panics if no scope is open.
	pub fn end_scope(&mut self) {
		loop {
			match self.log.pop().expect("attempt to end unopened scope") {
				Undo::Mark => break,

				Undo::Bind(key, Some(shadowed)) => {
					self.map.insert(key, shadowed);
				}

				Undo::Bind(key, None) => {
					self.map.remove(&key);
				}
			}
		}
	}
}
