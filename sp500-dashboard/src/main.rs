//! S&P 500 data visualization dashboard.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/SP500_data_.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse the CSV into `MarketData` and bound the date picker.
//! 4. On any control change: run `update_figures` and re-render both charts via D3.js.

use dioxus::prelude::*;
use spx_chart_ui::components::{ChartContainer, DateRangePicker, FieldSelector, LoadStatus};
use spx_chart_ui::js_bridge;
use spx_chart_ui::state::{picker_range, AppState};
use spx_core::MarketData;
use std::rc::Rc;

const MARKET_CSV_NAME: &str = "SP500_data_.csv";
const MARKET_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SP500_data_.csv"));

const LINE_CHART_ID: &str = "price-line-chart";
const BAR_CHART_ID: &str = "volume-bar-chart";

const DEBUG_MODE: bool = true;

fn main() {
    let level = if DEBUG_MODE {
        dioxus_logger::tracing::Level::DEBUG
    } else {
        dioxus_logger::tracing::Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sp500-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut dataset: Signal<Option<Rc<MarketData>>> = use_signal(|| None);

    // ─── Effect 1: Parse the embedded CSV once on mount ───
    use_effect(move || {
        match MarketData::from_csv_str(MARKET_CSV) {
            Ok(data) => {
                log::info!(
                    "Loaded {} rows ({} to {})",
                    data.len(),
                    data.min_date(),
                    data.max_date()
                );
                state.reset_range(&data);
                dataset.set(Some(Rc::new(data)));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("failed to load market data: {e}");
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Recompute figures whenever a control changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let field = (state.selected_field)();
        let start = (state.start_date)();
        let end = (state.end_date)();

        if loading {
            return;
        }
        let Some(data) = dataset.read().clone() else {
            return;
        };

        let range = picker_range(&start, &end);
        let figures = spx_data::update_figures(&data, field, range);

        js_bridge::render_figure(LINE_CHART_ID, &figures.line);
        js_bridge::render_figure(BAR_CHART_ID, &figures.bar);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "text-align: center;",
                "S&P 500 Data Visualization"
            }

            LoadStatus { source: MARKET_CSV_NAME.to_string() }

            if !*state.loading.read() && state.error_msg.read().is_none() {
                ControlPanel {}
                ChartPanel {}
            }
        }
    }
}

/// Left column: field dropdown and date range picker.
#[component]
fn ControlPanel() -> Element {
    rsx! {
        div {
            style: "width: 30%; display: inline-block; vertical-align: top; padding: 20px; box-sizing: border-box;",
            label {
                r#for: "field-select",
                "Select the data type:"
            }
            FieldSelector {}

            br {}

            label {
                r#for: "date-range-start",
                "Choose a date range:"
            }
            DateRangePicker {}
        }
    }
}

/// Right column: the two linked charts.
#[component]
fn ChartPanel() -> Element {
    rsx! {
        div {
            style: "width: 65%; display: inline-block; padding: 20px; box-sizing: border-box;",
            ChartContainer { id: LINE_CHART_ID.to_string(), min_height: 420 }
            ChartContainer { id: BAR_CHART_ID.to_string(), min_height: 420 }
        }
    }
}
