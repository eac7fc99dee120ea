//! WASM entry points for the editor webview.

use wasm_bindgen::prelude::*;

use crate::context::NormalizationContext;
use crate::validate;

/// Validate a workflow JSON document for deployment.
/// Returns a `{ errors, warnings }` object of diagnostic records.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> NormalizationContext {
    let mut ctx = NormalizationContext::new();

    let workflow = match crate::parse::parse(json) {
        Ok(workflow) => workflow,
        Err(e) => {
            ctx.add_error(e.to_string());
            return ctx;
        }
    };

    validate::validate(&workflow, &mut ctx);
    ctx
}

/// Validate a single state JSON for the property panel.
/// Returns the same `{ errors, warnings }` shape as `validate_workflow`.
#[wasm_bindgen]
pub fn validate_state(json: &str) -> JsValue {
    let result = validate_state_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_state_inner(json: &str) -> NormalizationContext {
    let mut ctx = NormalizationContext::new();

    let state = match serde_json::from_str::<crate::parse::types::State>(json) {
        Ok(state) => state,
        Err(e) => {
            ctx.add_error(format!("Failed to parse state JSON: {e}"));
            return ctx;
        }
    };

    validate::validate_state(&state, &mut ctx);
    ctx
}
