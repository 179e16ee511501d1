//! Structured error types for virtual-scroll.
//!
//! Geometry is clamped at runtime and never produces an error; only
//! construction-time configuration and the replay harness can fail.

/// All errors that can occur while building or driving a windowing engine.
#[derive(Debug, thiserror::Error)]
pub enum ScrollError {
    /// Paging or overscan configuration that cannot produce a valid quantization.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Item size that is non-positive, negative, or not finite.
    #[error("Invalid item size: {0}")]
    InvalidItemSize(String),

    /// Malformed replay scenario.
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollError>;

#[cfg(target_arch = "wasm32")]
impl From<ScrollError> for wasm_bindgen::JsValue {
    fn from(e: ScrollError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
