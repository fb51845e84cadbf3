use super::validation::validate_context_file_name;
use crate::domain::AppError;

/// A validated build-context filename.
///
/// Guarantees:
/// - Non-empty
/// - Contains none of `< > : " / \ | ? *`
/// - Not `.` or `..`
/// - Not `Dockerfile` (case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextFileName(String);

impl ContextFileName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_context_file_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidFilename(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ContextFileName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ContextFileName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for ContextFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for ContextFileName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ContextFileName> for String {
    fn from(val: ContextFileName) -> Self {
        val.0
    }
}
