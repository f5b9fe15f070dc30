//! Semantic analysis module: the type model, symbol table, and checker.

mod checker;
mod symbol_table;
mod types;

pub use checker::{Checker, EqualityOp, LogicalOp, MultiplicativeOp, RelationalOp};
pub use symbol_table::{Scope, Symbol, SymbolTable};
pub use types::{Specifier, Type};
