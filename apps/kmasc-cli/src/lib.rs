#![allow(clippy::print_stderr)]

use serde::{Deserialize, Serialize};

pub mod command;

/// Process exit codes besides success.
pub mod exit_code {
    pub const FAILURE: u8 = 1;
    /// Ledger mismatch, invalid signature or absent plugin. The call itself succeeded.
    pub const NEGATIVE: u8 = 3;
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}
