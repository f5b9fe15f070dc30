//! Symbol table for tracking declarations and scopes.

use super::types::Type;

/// A name bound to a type
///
/// The pair is immutable after construction; a symbol belongs to exactly
/// one scope, and callers get clones rather than aliases into the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A single scope level
///
/// Symbols are kept in declaration order. Uniqueness is not enforced
/// here; redeclaration policy lives in the checker.
#[derive(Debug, Default)]
pub struct Scope {
    symbols: Vec<Symbol>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol to this scope
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Remove the first symbol with the given name; no-op if absent
    pub fn remove(&mut self, name: &str) {
        if let Some(position) = self.symbols.iter().position(|s| s.name == name) {
            self.symbols.remove(position);
        }
    }

    /// Find a symbol in this scope only, first match in declaration order
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// The symbols declared in this scope, in declaration order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Symbol table with nested scopes
///
/// Scopes form a strict stack: the scope opened first is the global scope
/// and stays at the bottom until the end of translation.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// An empty table; the global scope appears on the first `open_scope`
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Enter a new scope
    pub fn open_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Exit the current scope, returning it for inspection before release
    pub fn close_scope(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// Find a symbol in the current scope only
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.find(name))
    }

    /// Find a symbol in the global scope only
    pub fn find_global(&self, name: &str) -> Option<&Symbol> {
        self.scopes.first().and_then(|scope| scope.find(name))
    }

    /// Look up a symbol from the innermost scope outward; the innermost
    /// match wins, so nested declarations shadow outer ones
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.find(name))
    }

    /// Insert a symbol into the current scope
    pub fn insert(&mut self, symbol: Symbol) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(symbol);
        }
    }

    /// Insert a symbol into the global scope
    pub fn insert_global(&mut self, symbol: Symbol) {
        if let Some(scope) = self.scopes.first_mut() {
            scope.insert(symbol);
        }
    }

    /// Remove the first matching symbol from the global scope
    pub fn remove_global(&mut self, name: &str) {
        if let Some(scope) = self.scopes.first_mut() {
            scope.remove(name);
        }
    }

    /// Check if the current scope is the global scope
    pub fn is_global(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
