//! Semantic analysis core for Simple C.
//!
//! Simple C is a small C-like language with `char`, `int`, `long`, and
//! `void`, pointers, arrays, and functions. This crate holds its static
//! semantics: a type model, a lexically scoped symbol table, and a checker
//! that an external recursive-descent parser drives in grammar order.

pub mod diagnostics;
pub mod semantic;

// Re-export commonly used types
pub use diagnostics::{codes, Diagnostic, DiagnosticLevel, DiagnosticReporter};
pub use semantic::{Checker, Scope, Specifier, Symbol, SymbolTable, Type};
