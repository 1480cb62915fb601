use wasm_bindgen::prelude::*;

use crate::checkout::CheckoutRequest;
use crate::commands;
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;

/// Initialize panic hook for better error messages in browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_request(data: &str) -> Result<CheckoutRequest, JsValue> {
    serde_json::from_str(data)
        .map_err(|e| JsValue::from_str(&format!("Error: {}", CheckoutError::InvalidRequest(e))))
}

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("Error: {}", e))
}

// WASM-exposed checkout functions. Each takes a CheckoutRequest as JSON and
// returns the JSON result of the matching command.

#[wasm_bindgen]
pub fn wasm_validate(data: String) -> Result<String, JsValue> {
    let request = parse_request(&data)?;
    commands::validate_core(&CheckoutConfig::default(), &request)
        .map(|r| r.result)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn wasm_compose_message(data: String) -> Result<String, JsValue> {
    let request = parse_request(&data)?;
    commands::summary_core(&CheckoutConfig::default(), &request)
        .map(|r| r.result)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn wasm_checkout_url(data: String) -> Result<String, JsValue> {
    let request = parse_request(&data)?;
    commands::link_core(&CheckoutConfig::default(), &request)
        .map(|r| r.result)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn wasm_handoff(data: String) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::handoff::BrowserLauncher;
        let request = parse_request(&data)?;
        commands::buy_core(&CheckoutConfig::default(), &request, &BrowserLauncher)
            .map(|r| r.result)
            .map_err(js_error)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = data;
        Err(JsValue::from_str("WASM functions only available in WASM target"))
    }
}
