//! The three fixed sections of the app.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveRoute {
    #[default]
    App,
    About,
    Github,
}

impl ActiveRoute {
    pub const ALL: [ActiveRoute; 3] = [ActiveRoute::App, ActiveRoute::About, ActiveRoute::Github];

    pub fn index(self) -> usize {
        match self {
            ActiveRoute::App => 0,
            ActiveRoute::About => 1,
            ActiveRoute::Github => 2,
        }
    }

    /// Stable identifier used for CSS modifiers and element ids.
    pub fn slug(self) -> &'static str {
        match self {
            ActiveRoute::App => "app",
            ActiveRoute::About => "about",
            ActiveRoute::Github => "github",
        }
    }

    /// Horizontal offset of the tab indicator, in percent of one tab width.
    pub fn indicator_offset_percent(self) -> f32 {
        self.index() as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_ordered() {
        let indices: Vec<usize> = ActiveRoute::ALL.iter().map(|r| r.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(ActiveRoute::default(), ActiveRoute::App);
    }

    #[test]
    fn indicator_follows_index() {
        assert_eq!(ActiveRoute::App.indicator_offset_percent(), 0.0);
        assert_eq!(ActiveRoute::About.indicator_offset_percent(), 100.0);
        assert_eq!(ActiveRoute::Github.indicator_offset_percent(), 200.0);
    }
}
