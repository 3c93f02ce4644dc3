//! Text transformation
//!
//! Empty or missing input is replaced with [`DEFAULT_TEXT`] and a warning is
//! logged; anything else passes through unchanged.

use tracing::{info, warn};

use crate::settings::DEFAULT_TEXT;

pub fn process_text(text: Option<&str>) -> &str {
    match text {
        Some(text) if !text.is_empty() => {
            info!("Processing text: {}", text);
            text
        }
        _ => {
            warn!("No text provided to process.");
            DEFAULT_TEXT
        }
    }
}
