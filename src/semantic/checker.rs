//! Semantic checker for Simple C.
//!
//! One operation per declaration, expression, and statement shape. An
//! external recursive-descent parser drives these in grammar order,
//! passing already-computed operand types; every rule reports at most one
//! diagnostic and yields the error type, so analysis never stops early.

use std::fmt;

use super::symbol_table::{Scope, Symbol, SymbolTable};
use super::types::{Specifier, Type};
use crate::diagnostics::{codes, Diagnostic, DiagnosticReporter};

/// Logical binary operators (`&&`, `||`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "&&"),
            LogicalOp::Or => write!(f, "||"),
        }
    }
}

/// Multiplicative binary operators (`*`, `/`, `%`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOp {
    Multiply,
    Divide,
    Remainder,
}

impl fmt::Display for MultiplicativeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiplicativeOp::Multiply => write!(f, "*"),
            MultiplicativeOp::Divide => write!(f, "/"),
            MultiplicativeOp::Remainder => write!(f, "%"),
        }
    }
}

/// Relational binary operators (`<`, `>`, `<=`, `>=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOp {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationalOp::Less => write!(f, "<"),
            RelationalOp::Greater => write!(f, ">"),
            RelationalOp::LessEqual => write!(f, "<="),
            RelationalOp::GreaterEqual => write!(f, ">="),
        }
    }
}

/// Equality binary operators (`==`, `!=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityOp {
    Equal,
    NotEqual,
}

impl fmt::Display for EqualityOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqualityOp::Equal => write!(f, "=="),
            EqualityOp::NotEqual => write!(f, "!="),
        }
    }
}

/// The checker that enforces Simple C's declaration and expression rules
pub struct Checker<'a> {
    symbols: SymbolTable,
    reporter: &'a mut DiagnosticReporter,
}

impl<'a> Checker<'a> {
    pub fn new(reporter: &'a mut DiagnosticReporter) -> Self {
        Self {
            symbols: SymbolTable::new(),
            reporter,
        }
    }

    /// Read-only view of the scope chain, for driver inspection
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Enter a new scope; the first call creates the global scope
    pub fn open_scope(&mut self) {
        self.symbols.open_scope();
    }

    /// Exit the current scope, returning it for inspection before release
    pub fn close_scope(&mut self) -> Option<Scope> {
        self.symbols.close_scope()
    }

    /// Define a function in the global scope. A definition always replaces
    /// any previous declaration or definition of the name; replacing a
    /// symbol that already carried a prototype is a redefinition.
    pub fn define_function(&mut self, name: &str, ty: Type) -> Symbol {
        if let Some(existing) = self.symbols.find_global(name).cloned() {
            if matches!(
                existing.ty,
                Type::Function {
                    parameters: Some(_),
                    ..
                }
            ) {
                self.report(codes::REDEFINITION, format!("redefinition of '{}'", name));
            } else if existing.ty != ty {
                self.report(
                    codes::CONFLICTING_TYPES,
                    format!("conflicting types for '{}'", name),
                );
            }
            self.symbols.remove_global(name);
        }

        let symbol = Symbol::new(name, ty);
        self.symbols.insert_global(symbol.clone());
        symbol
    }

    /// Declare a function in the global scope. A redeclaration keeps the
    /// original symbol; the redundant candidate is discarded.
    pub fn declare_function(&mut self, name: &str, ty: Type) -> Symbol {
        match self.symbols.find_global(name).cloned() {
            None => {
                let symbol = Symbol::new(name, ty);
                self.symbols.insert_global(symbol.clone());
                symbol
            }
            Some(existing) => {
                if existing.ty != ty {
                    self.report(
                        codes::CONFLICTING_TYPES,
                        format!("conflicting types for '{}'", name),
                    );
                }
                existing
            }
        }
    }

    /// Declare a variable in the current scope. Locals and parameters
    /// cannot be redeclared in the same block; a repeated global is legal
    /// as long as the types agree.
    pub fn declare_variable(&mut self, name: &str, ty: Type) -> Symbol {
        match self.symbols.find(name).cloned() {
            None => {
                if ty.specifier() == Some(Specifier::Void) && ty.indirection() == Some(0) {
                    self.reporter.add(
                        Diagnostic::error(
                            codes::VOID_OBJECT,
                            format!("'{}' has type void", name),
                        )
                        .with_help("void is only valid behind a pointer (void *)"),
                    );
                    return Symbol::new(name, ty);
                }
                let symbol = Symbol::new(name, ty);
                self.symbols.insert(symbol.clone());
                symbol
            }
            Some(existing) => {
                if !self.symbols.is_global() {
                    self.report(codes::REDECLARATION, format!("redeclaration of '{}'", name));
                } else if existing.ty != ty {
                    self.report(
                        codes::CONFLICTING_TYPES,
                        format!("conflicting types for '{}'", name),
                    );
                }
                existing
            }
        }
    }

    /// Check that a name is declared, searching every open scope. An
    /// undeclared name is recorded with the error type so that later
    /// references to it stay quiet.
    pub fn check_identifier(&mut self, name: &str) -> Symbol {
        match self.symbols.lookup(name).cloned() {
            Some(symbol) => symbol,
            None => {
                self.report(codes::UNDECLARED, format!("'{}' undeclared", name));
                let symbol = Symbol::new(name, Type::Error);
                self.symbols.insert(symbol.clone());
                symbol
            }
        }
    }

    /// `&&` and `||`: both promoted operands must be predicates
    pub fn check_logical(&mut self, left: &Type, right: &Type, op: LogicalOp) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        if left.promote().is_predicate() && right.promote().is_predicate() {
            return Type::scalar(Specifier::Int, 0);
        }
        self.invalid_binary(op);
        Type::Error
    }

    /// `!`: the operand must already be a predicate; no promotion applies
    pub fn check_not(&mut self, operand: &Type) -> Type {
        if operand.is_error() {
            return Type::Error;
        }
        if operand.is_predicate() {
            return Type::scalar(Specifier::Int, 0);
        }
        self.invalid_unary("!");
        Type::Error
    }

    /// Unary `-`: the promoted operand must be numeric
    pub fn check_negate(&mut self, operand: &Type) -> Type {
        if operand.is_error() {
            return Type::Error;
        }
        let promoted = operand.promote();
        if promoted.is_numeric() {
            return promoted;
        }
        self.invalid_unary("-");
        Type::Error
    }

    /// `*`, `/`, `%`: both operands must be numeric
    pub fn check_multiplicative(
        &mut self,
        left: &Type,
        right: &Type,
        op: MultiplicativeOp,
    ) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        if left.is_numeric() && right.is_numeric() {
            return Self::widen(left, right);
        }
        self.invalid_binary(op);
        Type::Error
    }

    /// `+`: numeric addition with widening, or pointer displacement on
    /// either side; `void *` admits no arithmetic
    pub fn check_add(&mut self, left: &Type, right: &Type) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        let left = left.promote();
        let right = right.promote();
        let void_pointer = Type::scalar(Specifier::Void, 1);

        if left.is_numeric() && right.is_numeric() {
            return Self::widen(&left, &right);
        }
        if left.is_pointer() && right.is_numeric() && left != void_pointer {
            return left;
        }
        if left.is_numeric() && right.is_pointer() && right != void_pointer {
            return right;
        }
        self.invalid_binary("+");
        Type::Error
    }

    /// `-`: numeric subtraction with widening, pointer displacement, or
    /// the difference of two compatible non-`void *` pointers
    pub fn check_subtract(&mut self, left: &Type, right: &Type) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        let left = left.promote();
        let right = right.promote();
        let void_pointer = Type::scalar(Specifier::Void, 1);

        if left.is_numeric() && right.is_numeric() {
            return Self::widen(&left, &right);
        }
        if left.is_pointer() && right.is_numeric() && left != void_pointer {
            return left;
        }
        if left.is_pointer()
            && right.is_pointer()
            && left.is_compatible_with(&right)
            && left != void_pointer
        {
            return Type::scalar(Specifier::Long, 0);
        }
        self.invalid_binary("-");
        Type::Error
    }

    /// `<`, `>`, `<=`, `>=`: two numerics, or two predicates of the same
    /// promoted type
    pub fn check_relational(&mut self, left: &Type, right: &Type, op: RelationalOp) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        let left = left.promote();
        let right = right.promote();
        if left.is_numeric() && right.is_numeric() {
            return Type::scalar(Specifier::Int, 0);
        }
        if left.is_predicate() && left == right {
            return Type::scalar(Specifier::Int, 0);
        }
        self.invalid_binary(op);
        Type::Error
    }

    /// `==`, `!=`: the promoted operands must be compatible
    pub fn check_equality(&mut self, left: &Type, right: &Type, op: EqualityOp) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        if left.promote().is_compatible_with(&right.promote()) {
            return Type::scalar(Specifier::Int, 0);
        }
        self.invalid_binary(op);
        Type::Error
    }

    /// Unary `*`: the promoted operand must point at something; `void *`
    /// cannot be dereferenced
    pub fn check_dereference(&mut self, operand: &Type) -> Type {
        if operand.is_error() {
            return Type::Error;
        }
        let promoted = operand.promote();
        if promoted.is_pointer() && promoted != Type::scalar(Specifier::Void, 1) {
            // a promoted pointer is always a scalar
            if let Type::Scalar {
                specifier,
                indirection,
            } = promoted
            {
                return Type::scalar(specifier, indirection - 1);
            }
        }
        self.invalid_unary("*");
        Type::Error
    }

    /// `[]`: a non-`void *` pointer subscripted by a numeric index
    pub fn check_index(&mut self, left: &Type, index: &Type) -> Type {
        if left.is_error() || index.is_error() {
            return Type::Error;
        }
        let left = left.promote();
        let index = index.promote();
        if left.is_pointer() && left != Type::scalar(Specifier::Void, 1) && index.is_numeric() {
            if let Type::Scalar {
                specifier,
                indirection,
            } = left
            {
                return Type::scalar(specifier, indirection - 1);
            }
        }
        self.invalid_binary("[]");
        Type::Error
    }

    /// Unary `&`: the operand must be an lvalue; the result points at the
    /// unpromoted operand type
    pub fn check_address(&mut self, operand: &Type, lvalue: bool) -> Type {
        if operand.is_error() {
            return Type::Error;
        }
        if !lvalue {
            self.report(codes::LVALUE_REQUIRED, "lvalue required in expression".into());
            return Type::Error;
        }
        match (operand.specifier(), operand.indirection()) {
            (Some(specifier), Some(indirection)) => Type::scalar(specifier, indirection + 1),
            _ => Type::Error,
        }
    }

    /// `sizeof`: any predicate that is not a function
    pub fn check_sizeof(&mut self, operand: &Type) -> Type {
        if operand.is_error() {
            return Type::Error;
        }
        if operand.is_predicate() && !operand.is_function() {
            return Type::scalar(Specifier::Long, 0);
        }
        self.invalid_unary("sizeof");
        Type::Error
    }

    /// A call expression. The callee must be a function and every promoted
    /// argument a predicate, prototype or not. Without a prototype any
    /// argument list is accepted; with one, the count must match and each
    /// promoted argument must be compatible with its parameter.
    pub fn check_call(&mut self, callee: &Type, arguments: &[Type]) -> Type {
        if callee.is_error() || arguments.iter().any(Type::is_error) {
            return Type::Error;
        }

        let (specifier, indirection, parameters) = match callee {
            Type::Function {
                specifier,
                indirection,
                parameters,
            } => (*specifier, *indirection, parameters),
            _ => {
                self.report(codes::NOT_A_FUNCTION, "called object is not a function".into());
                return Type::Error;
            }
        };

        for argument in arguments {
            if !argument.promote().is_predicate() {
                self.invalid_arguments();
                return Type::Error;
            }
        }

        let parameters = match parameters {
            Some(parameters) => parameters,
            None => return Type::scalar(specifier, indirection),
        };

        if parameters.len() != arguments.len() {
            self.invalid_arguments();
            return Type::Error;
        }

        for (parameter, argument) in parameters.iter().zip(arguments) {
            if !parameter.promote().is_compatible_with(&argument.promote()) {
                self.invalid_arguments();
                return Type::Error;
            }
        }

        Type::scalar(specifier, indirection)
    }

    /// `=`: the target must be an lvalue and the sides compatible
    pub fn check_assignment(&mut self, left: &Type, right: &Type, lvalue: bool) -> Type {
        if left.is_error() || right.is_error() {
            return Type::Error;
        }
        if !lvalue {
            self.report(codes::LVALUE_REQUIRED, "lvalue required in expression".into());
            return Type::Error;
        }
        if left.is_compatible_with(right) {
            return left.clone();
        }
        self.invalid_binary("=");
        Type::Error
    }

    /// The test expression of an `if` statement
    pub fn check_if(&mut self, test: &Type) -> Type {
        self.check_test(test)
    }

    /// The test expression of a `while` statement
    pub fn check_while(&mut self, test: &Type) -> Type {
        self.check_test(test)
    }

    /// The test expression of a `for` statement
    pub fn check_for(&mut self, test: &Type) -> Type {
        self.check_test(test)
    }

    /// `return`: the value must be compatible with the declared return type
    pub fn check_return(&mut self, return_type: &Type, value: &Type) -> Type {
        if return_type.is_error() || value.is_error() {
            return Type::Error;
        }
        if value.is_compatible_with(return_type) {
            return value.clone();
        }
        self.report(codes::INVALID_RETURN, "invalid return type".into());
        Type::Error
    }

    fn check_test(&mut self, test: &Type) -> Type {
        if test.is_error() {
            return Type::Error;
        }
        if test.is_predicate() {
            return test.clone();
        }
        self.report(codes::INVALID_TEST, "invalid type for test expression".into());
        Type::Error
    }

    // int unless either operand is long
    fn widen(left: &Type, right: &Type) -> Type {
        if left.specifier() == Some(Specifier::Long) || right.specifier() == Some(Specifier::Long)
        {
            Type::scalar(Specifier::Long, 0)
        } else {
            Type::scalar(Specifier::Int, 0)
        }
    }

    fn invalid_binary(&mut self, op: impl fmt::Display) {
        self.report(
            codes::INVALID_BINARY,
            format!("invalid operands to binary '{}'", op),
        );
    }

    fn invalid_unary(&mut self, op: &str) {
        self.report(
            codes::INVALID_UNARY,
            format!("invalid operand to unary '{}'", op),
        );
    }

    fn invalid_arguments(&mut self) {
        self.report(
            codes::INVALID_ARGUMENTS,
            "invalid arguments to called function".into(),
        );
    }

    fn report(&mut self, code: &str, message: String) {
        self.reporter.add(Diagnostic::error(code, message));
    }
}
