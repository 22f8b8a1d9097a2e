//! One collector per About panel row.
//!
//! Collectors are total: whatever the underlying tool does (missing binary,
//! empty output, truncated fields), they return a displayable struct. Parse
//! logic is split into pure functions over `&str` so tests run on canned
//! output instead of the host's real hardware.

pub mod disk;
pub mod graphics;
pub mod memory;
pub mod processor;
pub mod system;

use std::time::Duration;

/// Bound on any external diagnostic command. `lshw` in particular can hang
/// on some DMI tables; past this point the command is treated as having
/// produced no output.
pub(crate) const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
