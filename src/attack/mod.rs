// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack orchestration module

pub mod executor;
pub mod profile;
pub mod strategies;

use crate::error::ProbeError;
use crate::report::RunReport;
use crate::types::*;
use std::io::{Read, Write};

pub use executor::AttackExecutor;
pub use profile::AttackProfile;
pub use strategies::AttackStrategy;

/// Connect to the configured server and run the selected strategy
pub fn execute_attack(config: AttackConfig) -> Result<RunReport, ProbeError> {
    let executor = AttackExecutor::new(config);
    executor.execute()
}

/// Run the selected strategy over a transport the caller already owns
pub fn execute_attack_on<T: Read + Write>(
    config: AttackConfig,
    transport: &mut T,
) -> Result<RunReport, ProbeError> {
    let executor = AttackExecutor::new(config);
    executor.execute_on(transport)
}
