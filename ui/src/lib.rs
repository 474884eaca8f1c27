//! Shared UI crate for Lucid. All logic and views live here; the platform
//! crates only launch [`views::LucidRoot`] with their stylesheet.

pub mod classifier;
pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Bottom tab bar (components/navigation_bar.rs)
    pub mod navigation_bar;
    pub use navigation_bar::NavigationBar;

    // Transient error notices (components/notice_banner.rs)
    pub mod notice_banner;
    pub use notice_banner::{show_notice, NoticeBanner, ShownNotice};
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
