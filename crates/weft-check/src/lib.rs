//! Fail-fast invariant checking.
//!
//! Framework-internal preconditions are enforced with [`CheckError`]: a
//! violated check is a bug in the calling code, not a recoverable runtime
//! condition. Callers propagate the error unchanged with `?`; nothing in
//! the framework catches one and retries.
//!
//! A parameter check names the offending argument, so the failing call
//! site can be found from the message alone. Messages are diagnostic,
//! aimed at framework developers rather than end users.

/// Error raised by a violated invariant check.
///
/// Every variant is terminal for the operation that raised it and always
/// indicates a caller bug rather than bad external input.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A precondition on a named parameter did not hold.
    #[error("invariant violated for parameter {param}: {description}")]
    ParamInvariant {
        param: &'static str,
        description: String,
    },

    /// An invariant not tied to a single parameter did not hold.
    #[error("invariant failed: {description}")]
    Invariant { description: String },
}

impl CheckError {
    /// A precondition violation on the parameter `param`.
    pub fn param_invariant(param: &'static str, description: impl Into<String>) -> Self {
        Self::ParamInvariant {
            param,
            description: description.into(),
        }
    }

    /// A failed invariant not attributable to a single parameter.
    pub fn invariant(description: impl Into<String>) -> Self {
        Self::Invariant {
            description: description.into(),
        }
    }

    /// The parameter this error names, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::ParamInvariant { param, .. } => Some(param),
            Self::Invariant { .. } => None,
        }
    }
}

/// Require `condition` to hold for the parameter `param`.
pub fn param_invariant(
    condition: bool,
    param: &'static str,
    description: impl Into<String>,
) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::param_invariant(param, description))
    }
}

/// Require `condition` to hold.
pub fn invariant(condition: bool, description: impl Into<String>) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::invariant(description))
    }
}
