//! Dropdown for choosing the price field plotted on the line chart.

use crate::state::AppState;
use dioxus::prelude::*;
use spx_core::PriceField;

/// Price field dropdown. Always holds a value; there is no empty option.
#[component]
pub fn FieldSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_field)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<PriceField>() {
        Ok(field) => state.selected_field.set(field),
        Err(e) => log::warn!("field selector: {e}"),
    };

    rsx! {
        select {
            id: "field-select",
            style: "width: 100%; padding: 4px;",
            onchange: on_change,
            for field in PriceField::ALL {
                option {
                    value: "{field}",
                    selected: field == selected,
                    {field.label()}
                }
            }
        }
    }
}
