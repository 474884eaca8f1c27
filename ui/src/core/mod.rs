pub mod classification;
pub mod config;
pub mod format;
pub mod logging;
pub mod platform;
pub mod route;
pub mod screen;
pub mod session;
pub mod theme;
pub mod timing;
