//! Series Bars Component
//!
//! Labelled horizontal bars scaled against the largest value of the series.

use leptos::prelude::*;

use crate::models::SeriesPoint;

/// Bar width in percent of the largest value
pub fn bar_percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    value.saturating_mul(100) / max
}

#[component]
pub fn SeriesBars(
    #[prop(into)] title: String,
    points: Vec<SeriesPoint>,
    /// Appended to every value label
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);

    view! {
        <div class="card series">
            <h3>{title}</h3>
            {points
                .into_iter()
                .map(|p| {
                    let width = format!("width: {}%;", bar_percent(p.value, max));
                    view! {
                        <div class="series-row">
                            <span class="series-label">{p.label}</span>
                            <div class="series-track">
                                <div class="series-bar" style=width></div>
                            </div>
                            <span class="series-value">{format!("{}{}", p.value, unit)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(2200, 2200), 100);
        assert_eq!(bar_percent(1100, 2200), 50);
        assert_eq!(bar_percent(0, 0), 0);
    }
}
