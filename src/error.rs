use thiserror::Error;

/// Message returned when a request carries neither usable pasted text nor a URL
pub const MISSING_INPUT_MESSAGE: &str = "Provide a url or pastedText.";

/// Failures that can end a script generation request
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Neither pasted text nor a URL yielded usable content
    #[error("{0}")]
    Input(String),

    /// The page could not be retrieved
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Anything else that went wrong while extracting or templating
    #[error("{0}")]
    Unexpected(String),
}

impl ScriptError {
    /// The standard "no input" error
    pub fn missing_input() -> Self {
        ScriptError::Input(MISSING_INPUT_MESSAGE.to_string())
    }

    /// Build a fetch error from any displayable cause
    pub fn fetch(url: &str, cause: impl std::fmt::Display) -> Self {
        ScriptError::Fetch {
            url: url.to_string(),
            message: cause.to_string(),
        }
    }

    /// HTTP status code this error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            ScriptError::Input(_) => 400,
            ScriptError::Fetch { .. } | ScriptError::Unexpected(_) => 500,
        }
    }

    /// Returns true for client-side input errors
    pub fn is_input(&self) -> bool {
        matches!(self, ScriptError::Input(_))
    }
}
