// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack profile loading for reusable run settings.

use crate::candidates::wordlist;
use crate::types::{Alphabet, AttackConfig};
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AttackProfile {
    #[serde(default)]
    pub alphabet: Option<Alphabet>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
}

impl AttackProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading attack profile {}", path.display()))?;
        // Extension-based dispatch is explicit to avoid ambiguous parsing behavior.
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json attack profile {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml attack profile {}", path.display())),
            _ => Err(anyhow!(
                "unsupported attack profile extension for {}",
                path.display()
            )),
        }
    }

    /// Layer `overrides` on top of this profile; set fields in `overrides` win.
    pub fn merge(self, overrides: AttackProfile) -> AttackProfile {
        AttackProfile {
            alphabet: overrides.alphabet.or(self.alphabet),
            max_length: overrides.max_length.or(self.max_length),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
            wordlist: overrides.wordlist.or(self.wordlist),
        }
    }

    /// Resolve into a runnable config, loading the word list if one is set.
    pub fn into_config(self, host: String, port: u16) -> Result<AttackConfig> {
        let alphabet = self.alphabet.unwrap_or_default();

        if self.max_length == Some(0) {
            bail!("max_length must be at least 1");
        }

        let timeout = match self.timeout_secs {
            Some(0) => bail!("timeout_secs must be at least 1"),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let words = self
            .wordlist
            .map(|path| wordlist::load(&path))
            .transpose()
            .context("loading word list")?;

        Ok(AttackConfig {
            host,
            port,
            alphabet,
            max_length: self.max_length,
            timeout,
            words,
        })
    }
}
