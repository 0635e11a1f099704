// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run reports

pub mod formatter;

use crate::types::RunOutcome;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use formatter::ReportFormatter;

/// Summary of one run against a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub created_at: String,
    pub target: String,
    pub strategy: String,
    pub outcome: RunOutcome,
    /// Guesses actually sent over the wire
    pub attempts: u64,
    /// Search spaces started (lengths or words)
    pub spaces_tried: usize,
    pub elapsed_ms: u64,
}

/// Save report to file
pub fn save_report<P: AsRef<Path>>(report: &RunReport, path: P) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(report, path)
}

/// Print report summary to stderr
pub fn print_summary(report: &RunReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}
