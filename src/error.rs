use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// A required numeric field is missing, zero, negative or non‑finite
    /// where the physics does not allow it.
    #[error("Invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A unit tag reached the engine without being converted to the
    /// metric basis (°C, m, kg).
    #[error("Inconsistent units for `{field}`: got {found}, expected {expected}")]
    InconsistentUnits {
        field: &'static str,
        found: String,
        expected: String,
    },
}

impl LoadError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoadError::InvalidInput { field, reason: reason.into() }
    }

    pub(crate) fn units(
        field: &'static str,
        found: impl std::fmt::Display,
        expected: impl std::fmt::Display,
    ) -> Self {
        LoadError::InconsistentUnits {
            field,
            found: found.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
