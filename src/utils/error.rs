use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid material choice: '{input}'")]
    InvalidMaterial { input: String },

    #[error("Invalid facade choice: '{input}'")]
    InvalidFacadeKind { input: String },

    #[error("Invalid dimension for {field}: '{value}' ({reason})")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed before a material was chosen")]
    InputClosed,

    #[error("No material factory selected for the order")]
    MaterialNotSelected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl OrderError {
    /// Recoverable errors are reported and the prompt is repeated.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            OrderError::InvalidFacadeKind { .. } | OrderError::InvalidDimension { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::InvalidMaterial { .. } | OrderError::InvalidFacadeKind { .. } => {
                "Invalid choice!".to_string()
            }
            OrderError::InvalidDimension { .. } => {
                "Invalid dimension: must be a positive number".to_string()
            }
            OrderError::InputClosed | OrderError::MaterialNotSelected => {
                "No material was chosen".to_string()
            }
            OrderError::IoError(e) => format!("Console I/O failed: {}", e),
            OrderError::SerializationError(e) => format!("Could not render the order: {}", e),
            OrderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrderError::InvalidMaterial { .. } => "Enter 1 (Film), 2 (Painted) or 3 (Plastic)",
            OrderError::InvalidFacadeKind { .. } => "Enter 1 (Solid), 2 (Glass) or 0 to finish",
            OrderError::InvalidDimension { .. } => "Enter a number greater than zero, e.g. 1.5",
            OrderError::InputClosed | OrderError::MaterialNotSelected => {
                "Run the program again and choose a material"
            }
            OrderError::IoError(_) => "Check that the terminal is still attached",
            OrderError::SerializationError(_) => "Retry without --json",
            OrderError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
