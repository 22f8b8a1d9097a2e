//! Size and clock token normalization
//!
//! Listing tools mix binary-suffixed sizes ("24GiB", "512MiB") with plain
//! byte counts, and clock speeds appear either as a dedicated field or as an
//! "@ 2.80GHz" annotation inside a CPU model string. Everything here
//! normalizes silently: a token that does not parse is treated as absent,
//! never surfaced as an error.

/// Parse a binary-suffixed size token to bytes.
///
/// Suffixes are case-sensitive and checked most specific first: GiB, MiB,
/// KiB, then bare B. Unknown suffixes and non-positive values yield `None`.
pub fn parse_size_bytes(token: &str) -> Option<u64> {
    let token = token.trim();
    let (number, multiplier) = if let Some(v) = token.strip_suffix("GiB") {
        (v, 1u64 << 30)
    } else if let Some(v) = token.strip_suffix("MiB") {
        (v, 1u64 << 20)
    } else if let Some(v) = token.strip_suffix("KiB") {
        (v, 1u64 << 10)
    } else if let Some(v) = token.strip_suffix('B') {
        (v, 1)
    } else {
        return None;
    };

    let value: f64 = number.trim().parse().ok()?;
    if value <= 0.0 {
        return None;
    }
    Some((value * multiplier as f64) as u64)
}

/// Format a memory size in whole gigabytes: bytes / 2^30, rounded.
/// The unit label stays "GB" to match what vendors print on the box.
pub fn format_memory_size(bytes: u64) -> String {
    let gib = bytes as f64 / (1u64 << 30) as f64;
    format!("{} GB", gib.round() as u64)
}

/// Format a disk capacity in decimal units: whole GB below one terabyte,
/// two-decimal TB above.
pub fn format_disk_capacity(bytes: u64) -> String {
    let gb = bytes as f64 / 1_000_000_000.0;
    if gb >= 1000.0 {
        format!("{:.2} TB", gb / 1000.0)
    } else {
        format!("{:.0} GB", gb)
    }
}

/// Pull a clock value out of an "@ <value> GHz" annotation in a CPU model
/// string. Whitespace around the value is tolerated.
pub fn embedded_clock_ghz(model: &str) -> Option<f64> {
    let after_at = model.split_once('@')?.1.trim_start();
    let digits_end = after_at
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(after_at.len());
    if digits_end == 0 {
        return None;
    }
    let (number, rest) = after_at.split_at(digits_end);
    if !rest.trim_start().starts_with("GHz") {
        return None;
    }
    number.parse().ok().filter(|v| *v > 0.0)
}

/// One-decimal clock display, e.g. "2.8 GHz"
pub fn format_ghz(value: f64) -> String {
    format!("{:.1} GHz", value)
}

/// Reformat a clock token missing the space before its unit
/// ("2400MHz" -> "2400 MHz"); tokens already spaced pass through.
pub fn space_clock_unit(token: &str) -> String {
    if token.ends_with("MHz") && !token.contains(' ') {
        let split = token.len() - 3;
        format!("{} {}", &token[..split], &token[split..])
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_known_suffixes() {
        assert_eq!(parse_size_bytes("24GiB"), Some(24 * (1u64 << 30)));
        assert_eq!(parse_size_bytes("512MiB"), Some(512 * (1u64 << 20)));
        assert_eq!(parse_size_bytes("64KiB"), Some(64 * 1024));
        assert_eq!(parse_size_bytes("2048B"), Some(2048));
    }

    #[test]
    fn parse_size_rejects_unknown_tokens() {
        assert_eq!(parse_size_bytes("abc"), None);
        assert_eq!(parse_size_bytes("24GB"), None); // decimal suffix unsupported
        assert_eq!(parse_size_bytes("gib"), None);
        assert_eq!(parse_size_bytes("0GiB"), None);
    }

    #[test]
    fn parse_size_is_monotonic_within_unit() {
        let sizes = ["1GiB", "2GiB", "16GiB", "24GiB", "512GiB"];
        let parsed: Vec<u64> = sizes.iter().map(|s| parse_size_bytes(s).unwrap()).collect();
        assert!(parsed.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn memory_size_rounds_binary_gigabytes() {
        assert_eq!(format_memory_size(24 * (1u64 << 30)), "24 GB");
        // 15.9 GiB of usable RAM still reads as 16 GB
        assert_eq!(format_memory_size(17_072_000_000), "16 GB");
        assert_eq!(format_memory_size(0), "0 GB");
    }

    #[test]
    fn disk_capacity_decimal_units() {
        assert_eq!(format_disk_capacity(2_000_000_000_000), "2.00 TB");
        assert_eq!(format_disk_capacity(500_000_000_000), "500 GB");
        assert_eq!(format_disk_capacity(999_000_000_000), "999 GB");
        assert_eq!(format_disk_capacity(1_000_000_000_000), "1.00 TB");
    }

    #[test]
    fn embedded_clock_variants() {
        assert_eq!(embedded_clock_ghz("Intel(R) Core(TM) i5-8400 CPU @ 2.80GHz"), Some(2.8));
        assert_eq!(embedded_clock_ghz("Xeon @ 3 GHz"), Some(3.0));
        assert_eq!(embedded_clock_ghz("AMD Ryzen 7 5800X 8-Core Processor"), None);
        assert_eq!(embedded_clock_ghz("weird @ MHz"), None);
    }

    #[test]
    fn clock_unit_spacing() {
        assert_eq!(space_clock_unit("2400MHz"), "2400 MHz");
        assert_eq!(space_clock_unit("2400 MHz"), "2400 MHz");
        assert_eq!(space_clock_unit("3.2GHz"), "3.2GHz"); // only MHz is respaced
    }
}
