use dioxus::prelude::*;

use crate::core::{classification::ChartSlice, theme::StyleTable};

/// One row per slice, in slice order: swatch, label, percentage.
#[component]
pub fn ResultTable(slices: Vec<ChartSlice>, styles: StyleTable) -> Element {
    rsx! {
        div { class: "results-table",
            for (index, slice) in slices.into_iter().enumerate() {
                div {
                    key: "{slice.label}",
                    class: "results-table__row",
                    style: "{styles.table_row} animation-delay: {index * 100}ms;",
                    span {
                        class: "results-table__swatch",
                        style: "background-color: {slice.color};",
                    }
                    span { class: "results-table__label", style: "{styles.table_label}", "{slice.label}" }
                    span {
                        class: "results-table__percentage",
                        style: "{styles.table_percentage}",
                        "{slice.percent_label()}"
                    }
                }
            }
        }
    }
}
