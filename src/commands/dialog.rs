/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.alert_with_message(message) {
            log::error!("[DIALOG] alert failed: {:?}", err);
        }
    }
}
