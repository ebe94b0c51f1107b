//! Blocking operator notification.
//!
//! Wraps `window.alert` so callers stay free of `web_sys` plumbing.
//! SSR paths safely no-op to keep server rendering deterministic.

/// Show a blocking alert dialog with the given message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
