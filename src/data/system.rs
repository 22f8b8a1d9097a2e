//! System-wide information structures

use super::hardware::{DiskInfo, GraphicsInfo, MemoryInfo, ProcessorInfo};

/// Everything the About panel displays
#[derive(Debug, Clone, PartialEq)]
pub struct AboutInfo {
    pub processor: ProcessorInfo,
    pub memory: MemoryInfo,
    pub graphics: GraphicsInfo,
    pub disk: DiskInfo,
    pub os: OsVersionInfo,
}

/// Operating system identity from the os-release descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct OsVersionInfo {
    /// Product name, e.g. "SynOS"
    pub name: String,
    /// Full version string, e.g. "1.0 Canora (Beta 2)"
    pub version: String,
    /// Leading version token for compact display, e.g. "1.0"
    pub short_version: String,
}
