//! Browser Command Wrappers
//!
//! Thin wrappers over the web APIs the deck needs, organized by concern.

mod dialog;
mod download;
mod files;
mod layout;

// Re-export all public items
pub use dialog::*;
pub use download::*;
pub use files::*;
pub use layout::*;

use crate::error::{AppError, AppResult};

fn document() -> AppResult<web_sys::Document> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| AppError::browser("no document"))
}
