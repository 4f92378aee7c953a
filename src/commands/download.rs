//! Download Commands
//!
//! Offer in-memory text as a file download.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::document;
use crate::error::{AppError, AppResult};

/// Wrap `contents` in a Blob and click a temporary download link for it
pub fn download_text(file_name: &str, mime_type: &str, contents: &str) -> AppResult<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document()?
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::browser("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}
