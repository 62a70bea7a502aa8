use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("No global `{0}` available")]
    MissingGlobal(&'static str),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid style value for `{field}`: {message}")]
    InvalidStyle { field: &'static str, message: String },

    #[error("Invalid style configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn invalid_style(field: &'static str, message: impl Into<String>) -> Self {
        ConsoleError::InvalidStyle {
            field,
            message: message.into(),
        }
    }
}
