//! What the dashboard shows before its controls: a parse in progress, or
//! the reason the embedded CSV was rejected.

use crate::state::AppState;
use dioxus::prelude::*;
use spx_core::market_row::{CLOSE_COLUMN, DATE_COLUMN, OPEN_COLUMN, VOLUME_COLUMN};

#[derive(Props, Clone, PartialEq)]
pub struct LoadStatusProps {
    /// File name of the dataset, used in messages
    pub source: String,
}

/// Renders nothing once the data is loaded without error.
#[component]
pub fn LoadStatus(props: LoadStatusProps) -> Element {
    let state = use_context::<AppState>();
    let error = state.error_msg.read().clone();
    let loading = (state.loading)();
    let required = [DATE_COLUMN, OPEN_COLUMN, CLOSE_COLUMN, VOLUME_COLUMN].join(", ");

    rsx! {
        if let Some(message) = error {
            div {
                role: "alert",
                style: "padding: 12px 16px; margin: 8px auto; max-width: 720px; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
                p { style: "margin: 0 0 4px 0;", strong { "{props.source} could not be loaded" } }
                p { style: "margin: 0 0 4px 0;", "{message}" }
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "The file needs a header with {required} and a parseable date in every row."
                }
            }
        } else if loading {
            p {
                style: "text-align: center; padding: 40px; color: #666;",
                "Reading {props.source}..."
            }
        }
    }
}
