use dioxus::prelude::*;

use super::{PieChart, ResultTable};
use crate::core::{
    classification::{to_chart_slices, ClassificationResult},
    theme::StyleTable,
};

#[component]
pub fn ResultPanel(result: ClassificationResult, styles: StyleTable) -> Element {
    let slices = to_chart_slices(&result).to_vec();

    rsx! {
        section { class: "results fade-in",
            p { class: "results__label", style: "{styles.result_text}", "{result.result}" }
            PieChart {
                slices: slices.clone(),
                height: styles.chart_height,
                label_style: styles.chart_label.clone(),
            }
            ResultTable { slices, styles: styles.clone() }
        }
    }
}
