// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output
//!
//! Everything here writes to stderr; stdout carries only a found password.

use super::RunReport;
use crate::types::RunOutcome;
use anyhow::{anyhow, Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &RunReport) {
        eprintln!("\n{}", "=== LOCKPICK RUN REPORT ===".bold().cyan());
        eprintln!("  Target: {}", report.target);
        eprintln!("  Strategy: {}", report.strategy);
        eprintln!("  Attempts: {}", report.attempts);
        eprintln!("  Search spaces: {}", report.spaces_tried);
        eprintln!("  Elapsed: {:.2}s", report.elapsed_ms as f64 / 1000.0);
        eprintln!("  Outcome: {}", self.status_line(&report.outcome));
    }

    pub fn status_line(&self, outcome: &RunOutcome) -> ColoredString {
        match outcome {
            RunOutcome::Success(_) => outcome.to_string().green().bold(),
            RunOutcome::Lockout => outcome.to_string().red().bold(),
            RunOutcome::NotFound => outcome.to_string().yellow(),
        }
    }

    /// Write the report as JSON or YAML, chosen by file extension.
    pub fn save<P: AsRef<Path>>(&self, report: &RunReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(report)?,
            Some("yaml") | Some("yml") => serde_yaml::to_string(report)?,
            _ => {
                return Err(anyhow!(
                    "unsupported report extension for {}",
                    path.display()
                ))
            }
        };
        fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
        tracing::info!("Report saved to: {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> RunReport {
        RunReport {
            created_at: "2026-10-19T12:00:00+00:00".to_string(),
            target: "127.0.0.1:9090".to_string(),
            strategy: "length-escalation".to_string(),
            outcome: RunOutcome::Success("a2".to_string()),
            attempts: 65,
            spaces_tried: 2,
            elapsed_ms: 12,
        }
    }

    #[test]
    fn saves_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let formatter = ReportFormatter::new();

        let json_path = dir.path().join("run.json");
        formatter.save(&sample(), &json_path).unwrap();
        let parsed: RunReport =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, sample());

        let yaml_path = dir.path().join("run.yml");
        formatter.save(&sample(), &yaml_path).unwrap();
        let parsed: RunReport =
            serde_yaml::from_str(&fs::read_to_string(&yaml_path).unwrap()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let result = ReportFormatter::new().save(&sample(), dir.path().join("run.txt"));
        assert!(result.is_err());
    }
}
