use lazy_static::lazy_static;
use wasm_bindgen::JsValue;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "Channel Lens";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

// index.html injects `window.ENV_CONFIG` before the wasm bundle loads. Outside a browser, or
// with the object missing, every setting falls back to its default.
fn host_setting(key: &str) -> Option<String> {
    let config = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("ENV_CONFIG")).ok())
        .filter(|config| !config.is_undefined() && !config.is_null());

    let Some(config) = config else {
        log::warn!("window.ENV_CONFIG missing, using default for {key}");
        return None;
    };

    let value = js_sys::Reflect::get(&config, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string());
    if value.is_none() {
        log::warn!("ENV_CONFIG.{key} not set, using default");
    }
    value
}

/// A blank setting counts as unset.
fn setting_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1"
    )
}

pub fn get_backend_url() -> String {
    setting_or(host_setting("BACKEND_URL"), DEFAULT_BACKEND_URL)
}

pub fn get_app_name() -> String {
    setting_or(host_setting("APP_NAME"), DEFAULT_APP_NAME)
}

pub fn is_debug_mode() -> bool {
    parse_flag(host_setting("DEBUG_MODE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_settings_use_the_default() {
        assert_eq!(setting_or(None, DEFAULT_BACKEND_URL), "http://localhost:8000");
        assert_eq!(setting_or(Some("  ".into()), DEFAULT_APP_NAME), "Channel Lens");
        assert_eq!(
            setting_or(Some(" https://relay.example.com ".into()), DEFAULT_BACKEND_URL),
            "https://relay.example.com"
        );
    }

    #[test]
    fn debug_flag_accepts_true_and_one() {
        assert!(parse_flag(Some("true".into())));
        assert!(parse_flag(Some(" TRUE ".into())));
        assert!(parse_flag(Some("1".into())));
        assert!(!parse_flag(Some("false".into())));
        assert!(!parse_flag(Some("yes please".into())));
        assert!(!parse_flag(None));
    }
}
