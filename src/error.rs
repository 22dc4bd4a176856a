use thiserror::Error;

/// Errors raised while building a type tree.
///
/// A failed build never yields a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot map type `{type_name}` to a Thrift wire type")]
    Classification { type_name: String },

    #[error("type nesting exceeds the limit of {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("unsupported type form: {description}")]
    Unsupported { description: String },

    #[error("failed to parse type `{input}`: {message}")]
    Parse { input: String, message: String },

    #[error("cannot register `{name}`: {reason}")]
    Registration { name: String, reason: String },
}

impl BuildError {
    pub fn classification(type_name: impl Into<String>) -> Self {
        BuildError::Classification {
            type_name: type_name.into(),
        }
    }

    pub fn unsupported(description: impl Into<String>) -> Self {
        BuildError::Unsupported {
            description: description.into(),
        }
    }

    pub fn registration(name: impl Into<String>, reason: impl Into<String>) -> Self {
        BuildError::Registration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
