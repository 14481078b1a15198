//! Public entry points: the presentation seam and the C ABI for the host.

pub mod ffi;
pub mod form;

pub use form::{submit, FormSource, PredictionView, TextView};
