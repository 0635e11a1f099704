// SPDX-License-Identifier: PMPL-1.0-or-later

//! Word list loading for case-permutation mode

use crate::error::ProbeError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads one seed word per line, in file order.
///
/// Lines are trimmed and blank lines are skipped.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

pub fn load(path: &Path) -> Result<Vec<String>, ProbeError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ProbeError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => ProbeError::WordList {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let words = parse(BufReader::new(file)).map_err(|source| ProbeError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}
