use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeymapDrawerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl KeymapDrawerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The dotted field path a validation error refers to.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for KeymapDrawerError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field = err.path().to_string();
        Self::validation(field, err.into_inner().to_string())
    }
}

pub type KdResult<T> = Result<T, KeymapDrawerError>;
