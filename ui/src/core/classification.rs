//! Classification payload and the chart/table data derived from it.

use serde::{Deserialize, Serialize};

use super::format;

/// Outcome of one classification request, rendered as received.
///
/// The two probabilities are expected to sum to 1 but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default = "default_success")]
    pub success: bool,
    pub result: String,
    pub prob_dementia: f64,
    pub prob_no_dementia: f64,
}

fn default_success() -> bool {
    true
}

/// The two fixed chart categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dementia,
    NoDementia,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Dementia, Category::NoDementia];

    pub fn label(self) -> &'static str {
        match self {
            Category::Dementia => "Dementia",
            Category::NoDementia => "No Dementia",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Dementia => "#FF6384",
            Category::NoDementia => "#36A2EB",
        }
    }

    /// Backend code (`DEMENTIA` / `NO_DEMENTIA`) to category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "DEMENTIA" => Some(Category::Dementia),
            "NO_DEMENTIA" => Some(Category::NoDementia),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    pub label: &'static str,
    pub fraction: f64,
    pub color: &'static str,
}

impl ChartSlice {
    fn new(category: Category, fraction: f64) -> Self {
        Self {
            category,
            label: category.label(),
            fraction,
            color: category.color(),
        }
    }

    pub fn percent_label(&self) -> String {
        format::format_percent(self.fraction)
    }
}

/// Dementia first, No Dementia second; fractions are copied verbatim.
pub fn to_chart_slices(result: &ClassificationResult) -> [ChartSlice; 2] {
    [
        ChartSlice::new(Category::Dementia, result.prob_dementia),
        ChartSlice::new(Category::NoDementia, result.prob_no_dementia),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(dementia: f64, no_dementia: f64) -> ClassificationResult {
        ClassificationResult {
            success: true,
            result: "No Dementia".into(),
            prob_dementia: dementia,
            prob_no_dementia: no_dementia,
        }
    }

    #[test]
    fn slices_keep_fixed_order_and_colors() {
        let slices = to_chart_slices(&payload(0.4, 0.6));
        assert_eq!(slices[0].label, "Dementia");
        assert_eq!(slices[0].color, "#FF6384");
        assert_eq!(slices[1].label, "No Dementia");
        assert_eq!(slices[1].color, "#36A2EB");
    }

    #[test]
    fn slices_copy_probabilities_without_renormalizing() {
        let slices = to_chart_slices(&payload(0.4, 0.6));
        assert_eq!(slices[0].fraction, 0.4);
        assert_eq!(slices[1].fraction, 0.6);

        let skewed = to_chart_slices(&payload(0.7, 0.7));
        assert_eq!(skewed[0].fraction, 0.7);
        assert_eq!(skewed[1].fraction, 0.7);
    }

    #[test]
    fn table_labels_match_slices() {
        let labels: Vec<String> = to_chart_slices(&payload(0.4, 0.6))
            .iter()
            .map(ChartSlice::percent_label)
            .collect();
        assert_eq!(labels, vec!["40.0%", "60.0%"]);
    }

    #[test]
    fn success_defaults_to_true_when_absent() {
        let parsed: ClassificationResult = serde_json::from_value(json!({
            "result": "Dementia",
            "prob_dementia": 0.81,
            "prob_no_dementia": 0.19
        }))
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.result, "Dementia");
    }

    #[test]
    fn backend_codes_map_to_categories() {
        assert_eq!(Category::from_code("DEMENTIA"), Some(Category::Dementia));
        assert_eq!(Category::from_code("no_dementia"), Some(Category::NoDementia));
        assert_eq!(Category::from_code("maybe"), None);
    }
}
