//! Processor summary collection (lscpu)

use super::COMMAND_TIMEOUT;
use crate::data::ProcessorInfo;
use crate::utils::command::run_command_with_timeout;
use crate::utils::parsing::{extract_fields, FieldRule};
use crate::utils::units::{embedded_clock_ghz, format_ghz};

const LSCPU_RULES: &[FieldRule] = &[
    FieldRule { prefix: "Model name:", name: "model" },
    FieldRule { prefix: "Core(s) per socket:", name: "cores_per_socket" },
    FieldRule { prefix: "Socket(s):", name: "sockets" },
    FieldRule { prefix: "CPU max MHz:", name: "max_mhz" },
];

/// Collect processor information from `lscpu`
pub fn collect_processor_info() -> ProcessorInfo {
    let output = run_command_with_timeout("lscpu", &[], COMMAND_TIMEOUT).unwrap_or_default();
    parse_processor_output(&output)
}

pub(crate) fn parse_processor_output(output: &str) -> ProcessorInfo {
    let fields = extract_fields(output, LSCPU_RULES);

    let raw_model = fields.get("model").cloned().unwrap_or_default();
    let cores_per_socket = parse_count(fields.get("cores_per_socket"));
    let sockets = parse_count(fields.get("sockets"));

    // Product with 1-defaults, but only when at least one factor is known
    let physical_cores = match (cores_per_socket, sockets) {
        (None, None) => None,
        (cores, sockets) => Some(cores.unwrap_or(1) * sockets.unwrap_or(1)),
    };

    // VMs and some kernels omit "CPU max MHz"; the model string's own
    // "@ x.xxGHz" annotation is the fallback.
    let speed_ghz = fields
        .get("max_mhz")
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|mhz| *mhz > 0.0)
        .map(|mhz| mhz / 1000.0)
        .or_else(|| embedded_clock_ghz(&raw_model));

    let model = clean_model_name(&raw_model);

    let mut parts = Vec::new();
    if let Some(ghz) = speed_ghz {
        parts.push(format_ghz(ghz));
    }
    if let Some(cores) = physical_cores {
        parts.push(format!("{}-core", cores));
    }
    if !model.is_empty() {
        parts.push(model.clone());
    }

    ProcessorInfo {
        model,
        speed_ghz,
        physical_cores,
        summary: parts.join(" "),
    }
}

fn parse_count(value: Option<&String>) -> Option<u32> {
    value.and_then(|v| v.parse().ok()).filter(|n| *n > 0)
}

/// Strip marketing noise from a model string: trademark-qualified tokens,
/// the word "CPU", and everything from the "@" frequency annotation on.
fn clean_model_name(raw: &str) -> String {
    let before_at = raw.split('@').next().unwrap_or(raw);
    before_at
        .split_whitespace()
        .filter(|token| !token.contains("(R)") && !token.contains("(TM)"))
        .filter(|token| !token.eq_ignore_ascii_case("cpu"))
        .collect::<Vec<_>>()
        .join(" ")
}
