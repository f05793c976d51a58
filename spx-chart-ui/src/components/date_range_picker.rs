//! Start/end date inputs bounded by the dataset's first and last dates.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range picker for filtering chart data.
///
/// Values are `YYYY-MM-DD`; the browser enforces the `min`/`max` bounds.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 6px;",
            input {
                id: "date-range-start",
                r#type: "date",
                value: "{start}",
                min: "{min}",
                max: "{max}",
                onchange: on_start_change,
            }
            input {
                id: "date-range-end",
                r#type: "date",
                value: "{end}",
                min: "{min}",
                max: "{max}",
                onchange: on_end_change,
            }
        }
    }
}
