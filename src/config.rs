use wasm_bindgen::prelude::*;
use spectrum_core::ViewerConfig;

/// Global the host page may define to override viewer settings.
const CONFIG_GLOBAL: &str = "__SPECTRUM_VIEWER_CONFIG__";

/// Get the page-provided settings object, if any.
fn get_config_global() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Read settings from `window.__SPECTRUM_VIEWER_CONFIG__`, or defaults when absent.
pub fn load_config() -> Result<ViewerConfig, String> {
    let Some(value) = get_config_global() else {
        return Ok(ViewerConfig::default());
    };
    let text: String = js_sys::JSON::stringify(&value)
        .map_err(|e| format!("{CONFIG_GLOBAL} is not serialisable: {e:?}"))?
        .into();
    ViewerConfig::from_json(&text)
}
