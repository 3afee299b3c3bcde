//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! The Plotly helper functions live in `assets/js/plotly-chart.js` and are
//! embedded at compile time. They are evaluated as globals (no ES modules)
//! once Plotly itself has loaded, and exposed via `window.*`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Embed the chart JS at compile time
static PLOTLY_CHART_JS: &str = include_str!("../assets/js/plotly-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BBB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Interval between checks for Plotly and the chart containers.
const POLL_INTERVAL_MS: u32 = 100;

/// Checks before a wait loop gives up (15s at the interval above).
const MAX_POLL_ATTEMPTS: u32 = 150;

/// Initialize chart scripts with a wait-for-Plotly polling loop.
///
/// The helpers are declared with `function`, so they are evaluated with an
/// indirect `eval` at global scope and then promoted to `window.*`.
/// Calling this more than once is a no-op.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__bbbChartsReady && !window.__bbbChartScripts) {{ window.__bbbChartScripts = {}; }}",
        serde_json::to_string(PLOTLY_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);
    let _ = js_sys::eval(&init_charts_script());
}

fn init_charts_script() -> String {
    format!(
        r#"
        (function() {{
            if (window.__bbbChartsReady || window.__bbbChartsPolling) return;
            window.__bbbChartsPolling = true;
            var attempts = 0;
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__bbbChartScripts);
                    delete window.__bbbChartScripts;
                    if (typeof renderPlot !== 'undefined') window.renderPlot = renderPlot;
                    window.__bbbChartsPolling = false;
                    window.__bbbChartsReady = true;
                    console.log('BBB charts initialized');
                }} else if (++attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(waitForPlotly);
                    window.__bbbChartsPolling = false;
                    console.error('[BBB] Plotly did not load, charts disabled');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#,
    )
}

/// Draw a Plotly figure into `container_id`, replacing prior content.
///
/// Polls until Plotly, the chart helpers and the container element all
/// exist, so it is safe to call before the first render has mounted.
/// Gives up with a console error if they never appear.
pub fn render_plot(container_id: &str, data_json: &str, layout_json: &str) {
    call_js(&render_plot_script(container_id, data_json, layout_json));
}

fn render_plot_script(container_id: &str, data_json: &str, layout_json: &str) -> String {
    // JSON-encode the payloads so they land in JS as string literals
    let data_arg = serde_json::to_string(data_json).unwrap_or_default();
    let layout_arg = serde_json::to_string(layout_json).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__bbbChartsReady &&
                    typeof window.renderPlot !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPlot('{container_id}', {data_arg}, {layout_arg});
                    }} catch(e) {{ console.error('[BBB] renderPlot error:', e); }}
                }} else if (++attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.error('[BBB] gave up drawing #{container_id}: Plotly not ready');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#,
    )
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` with the browser fetch API and return the body as text.
///
/// Non-2xx responses are reported as errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(format!("HTTP {} fetching {}", response.status(), url));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| format!("response body from {} is not text", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_loop_stops_after_max_attempts() {
        let js = render_plot_script("bar", "[]", "{}");
        assert!(js.contains(&format!("++attempts >= {}", MAX_POLL_ATTEMPTS)));
        assert_eq!(js.matches("clearInterval(poll)").count(), 2);
        assert!(js.contains("console.error('[BBB] gave up drawing #bar"));
    }

    #[test]
    fn render_payloads_are_string_literals() {
        let js = render_plot_script("bubble", r#"[{"type":"bar"}]"#, "{}");
        assert!(js.contains(r#"window.renderPlot('bubble', "[{\"type\":\"bar\"}]", "{}")"#));
    }

    #[test]
    fn init_loop_stops_after_max_attempts() {
        let js = init_charts_script();
        assert!(js.contains(&format!("++attempts >= {}", MAX_POLL_ATTEMPTS)));
        assert_eq!(js.matches("clearInterval(waitForPlotly)").count(), 2);
        assert!(js.contains(&format!("}}, {});", POLL_INTERVAL_MS)));
    }
}
