//! Environment for variable scoping.
//!
//! Scopes live in a single `Vec` and refer to their parent by index, so no
//! scope owns another. A new scope always takes the current innermost scope
//! as its parent, which for a function call is the caller's scope.

use crate::Value;
use rustc_hash::FxHashMap;

/// Index of a scope in the environment's store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope holding builtins and top-level definitions.
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<ScopeId>,
}

impl Scope {
    fn new(parent: Option<ScopeId>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

/// Stack of scopes; the last one is the current scope.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new(None)],
        }
    }

    /// The innermost scope.
    #[inline]
    pub fn current(&self) -> ScopeId {
        ScopeId(self.scopes.len() - 1)
    }

    /// Number of live scopes, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Open a scope parented on the current one.
    pub fn push_scope(&mut self) -> ScopeId {
        let parent = self.current();
        self.scopes.push(Scope::new(Some(parent)));
        self.current()
    }

    /// Close the innermost scope. The root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn parent_of(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes.get(id.0).and_then(|s| s.parent)
    }

    /// Bind a name in the current scope, replacing any binding there.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.bindings.insert(name.into(), value);
        }
    }

    /// Bind a name in the root scope.
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.first_mut() {
            scope.bindings.insert(name.into(), value);
        }
    }

    /// Look up a name from the current scope outward.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut next = Some(self.current());
        while let Some(ScopeId(index)) = next {
            let scope = self.scopes.get(index)?;
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            next = scope.parent;
        }
        None
    }

    /// Whether the current scope itself binds `name`.
    pub fn is_local(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|s| s.bindings.contains_key(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
