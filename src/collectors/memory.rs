//! Memory summary collection (lshw memory class)
//!
//! `lshw -C memory` is the one tool that reports module type and clock as
//! well as size, but its output is sparse in VMs and containers. Every field
//! degrades to a placeholder, so this collector always produces all three
//! components.

use super::COMMAND_TIMEOUT;
use crate::data::MemoryInfo;
use crate::utils::command::run_command_with_timeout;
use crate::utils::parsing::{ddr_token, extract_prefixed};
use crate::utils::units::{format_memory_size, parse_size_bytes, space_clock_unit};

const UNKNOWN_CLOCK: &str = "Unknown MHz";
const UNKNOWN_TYPE: &str = "Unknown Type";

/// Collect memory information from `lshw -C memory`
pub fn collect_memory_info() -> MemoryInfo {
    let output =
        run_command_with_timeout("lshw", &["-C", "memory"], COMMAND_TIMEOUT).unwrap_or_default();
    parse_memory_output(&output)
}

pub(crate) fn parse_memory_output(output: &str) -> MemoryInfo {
    // First size that normalizes wins. Without root, lshw collapses the
    // listing to a single system-total entry, which is the value wanted;
    // per-bank entries only appear after it.
    let total_bytes = extract_prefixed(output, "size:")
        .iter()
        .find_map(|token| parse_size_bytes(token));

    let clock = extract_prefixed(output, "clock:")
        .into_iter()
        .next()
        .map(|token| space_clock_unit(&token));

    let memory_type = extract_prefixed(output, "description:")
        .iter()
        .find_map(|desc| ddr_token(desc));

    // "0 GB" doubles as the parse-failure report; the panel never shows an
    // empty memory row.
    let size_display = format_memory_size(total_bytes.unwrap_or(0));
    let summary = format!(
        "{} {} {}",
        size_display,
        clock.as_deref().unwrap_or(UNKNOWN_CLOCK),
        memory_type.as_deref().unwrap_or(UNKNOWN_TYPE),
    );

    MemoryInfo {
        total_bytes,
        clock,
        memory_type,
        summary,
    }
}
