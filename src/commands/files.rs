//! File Commands
//!
//! Reading user-selected files.

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::error::{AppError, AppResult};

/// Read a file picked by the user as UTF-8 text
pub async fn read_file_text(file: &File) -> AppResult<String> {
    let text = JsFuture::from(file.text()).await?;
    text.as_string()
        .ok_or_else(|| AppError::browser("file contents are not text"))
}

/// Take the first selected file and clear the input so the same
/// file can be picked again
pub fn take_selected_file(input: &HtmlInputElement) -> Option<File> {
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}
