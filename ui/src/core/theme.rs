//! Light/dark styling.
//!
//! Every themed element gets its inline style from one [`StyleTable`],
//! resolved from the current [`Theme`] and [`Layout`]. Structural rules
//! (flex layout, animations) stay in `assets/theme/main.css`; colours and
//! size-dependent metrics live here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Viewport heights below this use [`Layout::Compact`].
pub const COMPACT_HEIGHT_THRESHOLD: f64 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Regular,
    Compact,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Regular, Layout::Compact];

    pub fn from_viewport_height(height: f64) -> Self {
        if height < COMPACT_HEIGHT_THRESHOLD {
            Layout::Compact
        } else {
            Layout::Regular
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    background: &'static str,
    surface: &'static str,
    input_border: &'static str,
    input_text: &'static str,
    input_background: &'static str,
    placeholder: &'static str,
    accent: &'static str,
    on_accent: &'static str,
    heading: &'static str,
    row_background: &'static str,
    row_border: &'static str,
    muted: &'static str,
    strong: &'static str,
    chart_label: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: "#F8F9FA",
                surface: "#FFFFFF",
                input_border: "#E9ECEF",
                input_text: "#212529",
                input_background: "#FFFFFF",
                placeholder: "#666666",
                accent: "#4D96FF",
                on_accent: "#FFFFFF",
                heading: "#2B2D42",
                row_background: "#F8F9FA",
                row_border: "#E9ECEF",
                muted: "#495057",
                strong: "#2B2D42",
                chart_label: "rgba(0, 0, 0, 1)",
            },
            Theme::Dark => Palette {
                background: "#121212",
                surface: "#1E1E1E",
                input_border: "#2D2D2D",
                input_text: "#E9ECEF",
                input_background: "#2B2B2B",
                placeholder: "#BBBBBB",
                accent: "#6366F1",
                on_accent: "#FFFFFF",
                heading: "#E9ECEF",
                row_background: "#2B2B2B",
                row_border: "#3D3D3D",
                muted: "#ADB5BD",
                strong: "#E9ECEF",
                chart_label: "rgba(255, 255, 255, 1)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Metrics {
    padding: u32,
    input_font: u32,
    button_font: u32,
    result_font: u32,
    label_font: u32,
    percentage_font: u32,
    chart_height: u32,
    chart_label_font: u32,
}

impl Metrics {
    fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Regular => Metrics {
                padding: 20,
                input_font: 16,
                button_font: 17,
                result_font: 20,
                label_font: 15,
                percentage_font: 16,
                chart_height: 220,
                chart_label_font: 14,
            },
            Layout::Compact => Metrics {
                padding: 15,
                input_font: 15,
                button_font: 16,
                result_font: 19,
                label_font: 14,
                percentage_font: 15,
                chart_height: 180,
                chart_label_font: 12,
            },
        }
    }
}

/// Resolved inline styles for every themed element of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    pub theme: Theme,
    pub layout: Layout,
    pub container: String,
    pub widget: String,
    pub input: String,
    pub button: String,
    pub button_busy: String,
    pub button_text: String,
    pub result_text: String,
    pub chart_label: String,
    pub chart_height: u32,
    pub table_row: String,
    pub table_label: String,
    pub table_percentage: String,
    pub nav: String,
    pub nav_tab: String,
    pub nav_tab_active: String,
    pub nav_indicator: String,
    pub panel: String,
    pub panel_title: String,
    pub panel_body: String,
    pub notice: String,
}

impl StyleTable {
    pub fn resolve(theme: Theme, layout: Layout) -> Self {
        let p = Palette::for_theme(theme);
        let m = Metrics::for_layout(layout);

        let button = format!(
            "background-color: {}; color: {}; font-size: {}px;",
            p.accent, p.on_accent, m.button_font
        );

        Self {
            theme,
            layout,
            container: format!("background-color: {}; padding: {}px;", p.background, m.padding),
            widget: format!("background-color: {}; padding: {}px;", p.surface, m.padding),
            input: format!(
                "border-color: {}; color: {}; background-color: {}; font-size: {}px; --placeholder-color: {};",
                p.input_border, p.input_text, p.input_background, m.input_font, p.placeholder
            ),
            button_busy: format!("{button} opacity: 0.8;"),
            button,
            button_text: format!("color: {}; font-size: {}px;", p.on_accent, m.button_font),
            result_text: format!("color: {}; font-size: {}px;", p.heading, m.result_font),
            chart_label: format!("fill: {}; font-size: {}px;", p.chart_label, m.chart_label_font),
            chart_height: m.chart_height,
            table_row: format!(
                "background-color: {}; border-bottom-color: {};",
                p.row_background, p.row_border
            ),
            table_label: format!("color: {}; font-size: {}px;", p.muted, m.label_font),
            table_percentage: format!("color: {}; font-size: {}px;", p.strong, m.percentage_font),
            nav: format!("background-color: {}; border-top-color: {};", p.surface, p.row_border),
            nav_tab: format!("color: {}; font-size: {}px;", p.muted, m.label_font),
            nav_tab_active: format!("color: {}; font-size: {}px;", p.accent, m.label_font),
            nav_indicator: format!("background-color: {};", p.accent),
            panel: format!("background-color: {}; padding: {}px;", p.surface, m.padding),
            panel_title: format!("color: {}; font-size: {}px;", p.heading, m.result_font),
            panel_body: format!("color: {}; font-size: {}px;", p.muted, m.input_font),
            notice: format!(
                "background-color: {}; color: {}; border-color: #FF6384;",
                p.surface, p.strong
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_use_their_own_backgrounds() {
        let light = StyleTable::resolve(Theme::Light, Layout::Regular);
        let dark = StyleTable::resolve(Theme::Dark, Layout::Regular);
        assert!(light.container.contains("#F8F9FA"));
        assert!(dark.container.contains("#121212"));
        assert!(light.button.contains("#4D96FF"));
        assert!(dark.button.contains("#6366F1"));
        assert_ne!(light, dark);
    }

    #[test]
    fn compact_layout_shrinks_metrics() {
        let regular = StyleTable::resolve(Theme::Light, Layout::Regular);
        let compact = StyleTable::resolve(Theme::Light, Layout::Compact);
        assert!(regular.input.contains("font-size: 16px"));
        assert!(compact.input.contains("font-size: 15px"));
        assert_eq!(regular.chart_height, 220);
        assert_eq!(compact.chart_height, 180);
        assert!(compact.container.contains("padding: 15px"));
    }

    #[test]
    fn every_combination_resolves_every_element() {
        for theme in Theme::ALL {
            for layout in Layout::ALL {
                let table = StyleTable::resolve(theme, layout);
                assert_eq!(table.theme, theme);
                assert_eq!(table.layout, layout);
                for style in [
                    &table.container,
                    &table.widget,
                    &table.input,
                    &table.button,
                    &table.button_text,
                    &table.result_text,
                    &table.table_row,
                    &table.table_label,
                    &table.table_percentage,
                    &table.nav_tab_active,
                    &table.panel_body,
                ] {
                    assert!(!style.is_empty());
                }
            }
        }
    }

    #[test]
    fn resolving_twice_is_identical() {
        assert_eq!(
            StyleTable::resolve(Theme::Dark, Layout::Compact),
            StyleTable::resolve(Theme::Dark, Layout::Compact)
        );
    }

    #[test]
    fn busy_button_is_dimmed() {
        let table = StyleTable::resolve(Theme::Light, Layout::Regular);
        assert!(table.button_busy.starts_with(&table.button));
        assert!(table.button_busy.ends_with("opacity: 0.8;"));
    }

    #[test]
    fn viewport_threshold_selects_layout() {
        assert_eq!(Layout::from_viewport_height(640.0), Layout::Compact);
        assert_eq!(Layout::from_viewport_height(699.9), Layout::Compact);
        assert_eq!(Layout::from_viewport_height(700.0), Layout::Regular);
        assert_eq!(Layout::from_viewport_height(900.0), Layout::Regular);
    }

    #[test]
    fn prefers_dark_maps_to_theme() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    }
}
