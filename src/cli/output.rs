//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::services::publisher::FAIL;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        emit(&serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        emit(&result.to_human());
    }
}

/// Print a fatal error in the selected output mode
pub fn report_error(message: &str, json_mode: bool) {
    if json_mode {
        let value = serde_json::json!({ "success": false, "error": message });
        emit(&serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        emit(&format!("{FAIL}{message}"));
    }
}

// Unlike println!, a closed stdout is logged rather than a panic
fn emit(text: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
        warn!(error = %err, "Failed to write to stdout");
    }
}
