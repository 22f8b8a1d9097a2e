//! OS identity collection (os-release descriptor)

use crate::data::OsVersionInfo;
use crate::utils::file::read_file_safe;

const OS_RELEASE_PATH: &str = "/etc/os-release";
const UNKNOWN_VERSION: &str = "Unknown Version";
const DEFAULT_NAME: &str = "SynOS";

/// Collect OS name and version from the os-release file
pub fn collect_os_version() -> OsVersionInfo {
    let contents = read_file_safe(OS_RELEASE_PATH).unwrap_or_default();
    parse_os_release(&contents)
}

pub(crate) fn parse_os_release(contents: &str) -> OsVersionInfo {
    let version = os_release_value(contents, "VERSION")
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
    let name =
        os_release_value(contents, "NAME").unwrap_or_else(|| DEFAULT_NAME.to_string());

    // Compact header form: "1.0 Canora (Beta 2)" displays as "Version 1.0"
    let short_version = version
        .split_whitespace()
        .next()
        .unwrap_or(UNKNOWN_VERSION)
        .to_string();

    OsVersionInfo {
        name,
        version,
        short_version,
    }
}

/// Value of `KEY=` with surrounding quotes stripped; empty counts as absent
fn os_release_value(contents: &str, key: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let value = line.strip_prefix(key)?.strip_prefix('=')?;
        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
