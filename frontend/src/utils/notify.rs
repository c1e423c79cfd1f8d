use log::warn;

/// Blocking notification the user has to click away.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("Failed to show alert: {:?}", e);
            }
        }
        None => warn!("No window to show alert: {}", message),
    }
}
