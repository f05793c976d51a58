//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes figures and calls those globals.

use spx_data::figure::{ChartKind, Figure};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SPX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// loaded, then each renderer is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__spxChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__spxChartScripts);
                    delete window.__spxChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__spxChartsReady = true;
                    console.log('SPX charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Poll until the charts are initialized and the container exists, then call
/// `window.<js_fn>(container_id, figure_json)`.
fn render_when_ready(js_fn: &str, container_id: &str, figure_json: &str) {
    let escaped = escape_for_js(figure_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spxChartsReady &&
                    typeof window.{js_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{js_fn}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[SPX] {js_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a price line chart (or its "no data" placeholder).
pub fn render_line_chart(container_id: &str, figure_json: &str) {
    render_when_ready("renderLineChart", container_id, figure_json);
}

/// Render a volume bar chart (or its "no data" placeholder).
pub fn render_bar_chart(container_id: &str, figure_json: &str) {
    render_when_ready("renderBarChart", container_id, figure_json);
}

/// Serialize a figure and dispatch it to the renderer for its kind.
pub fn render_figure(container_id: &str, figure: &Figure) {
    let json = figure.to_json();
    match figure.kind {
        ChartKind::Line => render_line_chart(container_id, &json),
        ChartKind::Bar => render_bar_chart(container_id, &json),
    }
}

#[cfg(test)]
mod tests {
    use super::escape_for_js;

    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(escape_for_js(r#"{"title":"S&P's"}"#), r#"{"title":"S&P\'s"}"#);
        assert_eq!(escape_for_js("a\\\"b"), "a\\\\\"b");
        assert_eq!(escape_for_js("[1,\n2]"), "[1,2]");
    }
}
