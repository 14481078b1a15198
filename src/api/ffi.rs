//! C-compatible API exposed to the page host.
//!
//! Every string returned here is owned by Rust and must be released with
//! `attrition_free_str`. Null arguments never reach the pipeline; they are
//! answered with the error payload instead.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use serde_json::json;

use crate::api::form::{result_message, submit, PredictionView};
use crate::common::config::AppCfg;
use crate::common::error::{AttritionError, ErrorCode, VALIDATION_MESSAGE};
use crate::common::log;
use crate::evaluation;
use crate::inference::{self, Label};
use crate::input::FormValues;

/// ABI version to coordinate with the host.
#[no_mangle]
pub extern "C" fn attrition_api_version() -> u32 {
    1
}

/// Load configuration and install logging. Returns an `ErrorCode`.
#[no_mangle]
pub extern "C" fn attrition_init() -> u32 {
    match AppCfg::load() {
        Ok(cfg) => {
            log::init(&cfg);
            ErrorCode::Ok as u32
        }
        Err(err) => {
            log::init(&AppCfg::default());
            tracing::warn!(error = %err, "falling back to default configuration");
            err.code() as u32
        }
    }
}

/// Predict from the five raw field values; returns the display text.
#[no_mangle]
pub extern "C" fn attrition_predict(
    monthly_income: *const c_char,
    age: *const c_char,
    job_satisfaction: *const c_char,
    years_at_company: *const c_char,
    over_time: *const c_char,
) -> *const c_char {
    let fields = [
        monthly_income,
        age,
        job_satisfaction,
        years_at_company,
        over_time,
    ]
    .map(read_str);
    let [Some(mi), Some(age), Some(js), Some(yac), Some(ot)] = fields else {
        return string_to_raw(VALIDATION_MESSAGE.to_string());
    };

    let mut view = Captured::default();
    submit(&FormValues::new(mi, age, js, yac, ot), &mut view);
    string_to_raw(view.0)
}

/// Predict from a JSON object of form fields; returns a JSON payload.
#[no_mangle]
pub extern "C" fn attrition_predict_json(form_json: *const c_char) -> *const c_char {
    let Some(raw) = read_str(form_json) else {
        return error_json(ErrorCode::InvalidInput, "null input");
    };

    let outcome = serde_json::from_str::<FormValues>(&raw)
        .map_err(AttritionError::from)
        .and_then(|form| inference::predict_form(&form));

    match outcome {
        Ok(prediction) => {
            let result = prediction.result;
            let body = json!({
                "ok": true,
                "probability": result.probability,
                "label": result.label,
                "message": result_message(result.probability, result.label),
            });
            string_to_raw(body.to_string())
        }
        Err(err) => error_json(err.code(), &err.user_message()),
    }
}

/// Evaluate the built-in model on a JSON array of labelled records.
#[no_mangle]
pub extern "C" fn attrition_evaluate(samples_json: *const c_char) -> *const c_char {
    let Some(raw) = read_str(samples_json) else {
        return error_json(ErrorCode::InvalidInput, "null input");
    };

    let card = evaluation::evaluate_json(&raw)
        .and_then(|card| serde_json::to_value(card).map_err(AttritionError::from));
    match card {
        Ok(mut card) => {
            card["ok"] = json!(true);
            string_to_raw(card.to_string())
        }
        Err(err) => error_json(err.code(), &err.to_string()),
    }
}

/// Free strings allocated by Rust.
#[no_mangle]
pub extern "C" fn attrition_free_str(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(ptr as *mut c_char);
    }
}

/// Collects whichever message `submit` produced.
#[derive(Default)]
struct Captured(String);

impl PredictionView for Captured {
    fn on_result(&mut self, probability: f64, label: Label) {
        self.0 = result_message(probability, label);
    }

    fn on_error(&mut self, message: &str) {
        self.0 = message.to_string();
    }
}

fn read_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

fn error_json(code: ErrorCode, message: &str) -> *const c_char {
    let body = json!({
        "ok": false,
        "code": code as u32,
        "message": message,
    });
    string_to_raw(body.to_string())
}

fn string_to_raw(s: String) -> *const c_char {
    match CString::new(s) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => fallback_json_raw(),
    }
}

fn fallback_json_raw() -> *const c_char {
    CString::new("{\"ok\":false}".to_string())
        .expect("static fallback json is valid")
        .into_raw()
}
