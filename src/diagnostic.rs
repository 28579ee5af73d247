//! Diagnostic value type consumed and produced at the library boundary

use std::collections::HashMap;
use std::fmt;

use crate::error::LinAlgError;

const GENERIC_MESSAGE: &str = "An unspecified error has occurred.";

/// A short code plus a human-readable message.
///
/// The core routines only construct and raise these (via `LinAlgError`);
/// printing is always initiated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: String,
    message: String,
}

impl Diagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Look the code up in a caller-supplied code → message table,
    /// falling back to a generic message for unrecognised codes.
    pub fn from_table(code: &str, table: &HashMap<String, String>) -> Self {
        let message = table
            .get(code)
            .cloned()
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string());
        Diagnostic {
            code: code.to_string(),
            message,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Write to standard output: just the code, or `code: message`.
    pub fn print(&self, full: bool) {
        if full {
            println!("{}: {}", self.code, self.message);
        } else {
            println!("{}", self.code);
        }
    }
}

impl Default for Diagnostic {
    fn default() -> Self {
        Diagnostic::new("GEN", GENERIC_MESSAGE)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<&LinAlgError> for Diagnostic {
    fn from(err: &LinAlgError) -> Self {
        Diagnostic::new(err.code(), err.to_string())
    }
}
