use wasm_bindgen::JsCast;

use super::document;
use crate::error::{AppError, AppResult};

/// Flush pending style changes on an element so a following class
/// change starts a CSS transition instead of being merged with them
pub fn force_reflow(element_id: &str) -> AppResult<()> {
    let element = document()?
        .get_element_by_id(element_id)
        .ok_or_else(|| AppError::browser(format!("no element #{}", element_id)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::browser(format!("#{} is not an HTML element", element_id)))?;
    element.offset_height();
    Ok(())
}
