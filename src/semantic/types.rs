//! Type representation for Simple C semantic analysis.
//!
//! A type is either a scalar, an array, a function, or the error type.
//! Values are immutable once constructed; promotion returns a new value.

use std::fmt;

/// Base type specifier keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    Char,
    Int,
    Long,
    Void,
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Specifier::Char => "char",
            Specifier::Int => "int",
            Specifier::Long => "long",
            Specifier::Void => "void",
        };
        write!(f, "{}", keyword)
    }
}

/// A Simple C type
///
/// `Error` stands in for a type that already failed to check: it absorbs
/// every later check without producing further diagnostics.
#[derive(Debug, Clone)]
pub enum Type {
    Error,
    Scalar {
        specifier: Specifier,
        indirection: usize,
    },
    Array {
        specifier: Specifier,
        indirection: usize,
        length: usize,
    },
    Function {
        specifier: Specifier,
        indirection: usize,
        /// `None` for an unprototyped declaration, whose argument lists go
        /// unchecked in count and type; `Some(vec![])` for a declared
        /// `void`-parameter function, which accepts no arguments.
        parameters: Option<Vec<Type>>,
    },
}

impl Type {
    /// A scalar type: `specifier` plus `indirection` levels of pointers
    pub fn scalar(specifier: Specifier, indirection: usize) -> Self {
        Type::Scalar {
            specifier,
            indirection,
        }
    }

    /// An array of `length` elements of type `Scalar { specifier, indirection }`
    pub fn array(specifier: Specifier, indirection: usize, length: usize) -> Self {
        Type::Array {
            specifier,
            indirection,
            length,
        }
    }

    /// A function returning `Scalar { specifier, indirection }`
    pub fn function(specifier: Specifier, indirection: usize, parameters: Option<Vec<Type>>) -> Self {
        Type::Function {
            specifier,
            indirection,
            parameters,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Type::Scalar { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    /// A pointer-like type: a scalar with indirection, or any array
    /// (arrays count even before decay)
    pub fn is_pointer(&self) -> bool {
        match self {
            Type::Scalar { indirection, .. } => *indirection > 0,
            Type::Array { .. } => true,
            _ => false,
        }
    }

    /// A plain arithmetic value: a non-void scalar with no indirection
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Type::Scalar {
                specifier,
                indirection: 0,
            } if *specifier != Specifier::Void
        )
    }

    /// Usable as a truth or arithmetic operand
    pub fn is_predicate(&self) -> bool {
        self.is_pointer() || self.is_numeric()
    }

    /// The base specifier; absent only for the error type
    pub fn specifier(&self) -> Option<Specifier> {
        match self {
            Type::Error => None,
            Type::Scalar { specifier, .. }
            | Type::Array { specifier, .. }
            | Type::Function { specifier, .. } => Some(*specifier),
        }
    }

    /// Levels of indirection; absent only for the error type
    pub fn indirection(&self) -> Option<usize> {
        match self {
            Type::Error => None,
            Type::Scalar { indirection, .. }
            | Type::Array { indirection, .. }
            | Type::Function { indirection, .. } => Some(*indirection),
        }
    }

    /// Element count, for array types only
    pub fn length(&self) -> Option<usize> {
        match self {
            Type::Array { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// Declared parameter list, for function types only
    pub fn parameters(&self) -> Option<&Option<Vec<Type>>> {
        match self {
            Type::Function { parameters, .. } => Some(parameters),
            _ => None,
        }
    }

    /// Apply the implicit promotions: a plain `char` becomes `int`, and an
    /// array of T decays to pointer to T. Everything else is unchanged.
    pub fn promote(&self) -> Type {
        match self {
            Type::Scalar {
                specifier: Specifier::Char,
                indirection: 0,
            } => Type::scalar(Specifier::Int, 0),
            Type::Array {
                specifier,
                indirection,
                ..
            } => Type::scalar(*specifier, indirection + 1),
            other => other.clone(),
        }
    }

    /// Two types are compatible if, after promotion, both are numeric,
    /// both are the same pointer type, or one is a pointer and the other
    /// is `void *` (either direction).
    pub fn is_compatible_with(&self, that: &Type) -> bool {
        let this = self.promote();
        let that = that.promote();
        let void_pointer = Type::scalar(Specifier::Void, 1);

        if this.is_numeric() && that.is_numeric() {
            return true;
        }
        if this.is_pointer() && this == that {
            return true;
        }
        if this.is_pointer() && that == void_pointer {
            return true;
        }
        if this == void_pointer && that.is_pointer() {
            return true;
        }
        false
    }
}

// Not Eq: an absent parameter list compares equal to any parameter list,
// so function equality is not transitive.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Error, Type::Error) => true,

            (
                Type::Scalar {
                    specifier: a,
                    indirection: ai,
                },
                Type::Scalar {
                    specifier: b,
                    indirection: bi,
                },
            ) => a == b && ai == bi,

            (
                Type::Array {
                    specifier: a,
                    indirection: ai,
                    length: al,
                },
                Type::Array {
                    specifier: b,
                    indirection: bi,
                    length: bl,
                },
            ) => a == b && ai == bi && al == bl,

            (
                Type::Function {
                    specifier: a,
                    indirection: ai,
                    parameters: ap,
                },
                Type::Function {
                    specifier: b,
                    indirection: bi,
                    parameters: bp,
                },
            ) => {
                a == b
                    && ai == bi
                    && match (ap, bp) {
                        (Some(x), Some(y)) => x == y,
                        _ => true,
                    }
            }

            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Error => write!(f, "error"),
            Type::Scalar {
                specifier,
                indirection,
            }
            | Type::Array {
                specifier,
                indirection,
                ..
            }
            | Type::Function {
                specifier,
                indirection,
                ..
            } => {
                write!(f, "{}", specifier)?;
                if *indirection > 0 {
                    write!(f, " {}", "*".repeat(*indirection))?;
                }
                if let Type::Array { length, .. } = self {
                    write!(f, "[{}]", length)?;
                } else if self.is_function() {
                    write!(f, "()")?;
                }
                Ok(())
            }
        }
    }
}
