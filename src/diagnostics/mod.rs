//! Diagnostic reporting for semantic analysis.

mod reporter;

pub use reporter::DiagnosticReporter;

use colored::Colorize;
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "{}", "error".red().bold()),
            DiagnosticLevel::Warning => write!(f, "{}", "warning".yellow().bold()),
        }
    }
}

/// A semantic diagnostic
///
/// Diagnostics are plain values: the checker creates them, the reporter
/// collects them, and analysis carries on with the error type substituted
/// for whatever failed to check.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            code: code.to_string(),
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            code: code.to_string(),
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.level, DiagnosticLevel::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level, self.code.cyan(), self.message)?;
        if let Some(ref help) = self.help {
            write!(f, "\n   {} {}: {}", "=".blue(), "help".green().bold(), help)?;
        }
        Ok(())
    }
}

/// Error codes for semantic diagnostics
pub mod codes {
    // Declaration errors (E2xx)
    pub const REDEFINITION: &str = "E200";
    pub const REDECLARATION: &str = "E201";
    pub const CONFLICTING_TYPES: &str = "E202";
    pub const UNDECLARED: &str = "E203";
    pub const VOID_OBJECT: &str = "E204";

    // Expression and statement errors (E3xx)
    pub const INVALID_RETURN: &str = "E300";
    pub const INVALID_TEST: &str = "E301";
    pub const LVALUE_REQUIRED: &str = "E302";
    pub const INVALID_BINARY: &str = "E303";
    pub const INVALID_UNARY: &str = "E304";
    pub const NOT_A_FUNCTION: &str = "E305";
    pub const INVALID_ARGUMENTS: &str = "E306";
}
