use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Script parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl RenderError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RenderError::IoError(_) => "Check that the script path exists and stdout is writable",
            RenderError::TomlError(_) => {
                "Each [[steps]] entry needs a kind of person, employee or counter"
            }
            RenderError::ConfigError { .. } => "Review the command line arguments",
            RenderError::ValidationError { .. } => {
                "Give the script a name and at least one step"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
