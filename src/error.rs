//! Frontend Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Import payload is not JSON
    #[error("import is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Import payload is JSON but not an array of cards
    #[error("import must be a JSON array of flashcards")]
    NotAnArray,
    /// A DOM or JS call failed
    #[error("browser call failed: {0}")]
    Browser(String),
}

impl AppError {
    pub fn browser(msg: impl Into<String>) -> Self {
        AppError::Browser(msg.into())
    }

    /// Errors caused by the imported file rather than the browser
    pub fn is_bad_import(&self) -> bool {
        matches!(self, AppError::Parse(_) | AppError::NotAnArray)
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
