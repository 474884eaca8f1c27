//! Logger setup shared by the platform launchers.

use dioxus::logger::tracing::Level;

/// Install the Dioxus tracing subscriber: DEBUG in debug builds, INFO otherwise.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Already installed when relaunched under hot reload.
    let _ = dioxus::logger::init(level);
}
