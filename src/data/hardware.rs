//! Hardware-specific information structures
//!
//! Each struct keeps the parsed fields as `Option`s so "absent" stays
//! distinguishable from a real value, and a ready-to-display `summary`
//! string assembled by the owning collector. The summary is always present,
//! possibly a placeholder.

/// Processor information parsed from the CPU listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorInfo {
    /// Cleaned model name, empty when unknown
    pub model: String,
    pub speed_ghz: Option<f64>,
    pub physical_cores: Option<u32>,
    /// e.g. "2.8 GHz 6-core i5-8400"
    pub summary: String,
}

/// Memory information parsed from the hardware listing
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryInfo {
    pub total_bytes: Option<u64>,
    /// Clock token as reported, unit-spaced ("2400 MHz")
    pub clock: Option<String>,
    /// DDR generation token ("DDR4")
    pub memory_type: Option<String>,
    /// e.g. "24 GB 2400 MHz DDR4"; unknown parts become placeholders
    pub summary: String,
}

/// Primary display adapter
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsInfo {
    pub vendor: Option<String>,
    pub device: Option<String>,
    /// e.g. "NVIDIA GA102 [GeForce RTX 3080]"
    pub summary: String,
}

/// Root volume capacity and label
#[derive(Debug, Clone, PartialEq)]
pub struct DiskInfo {
    /// Volume label, if the filesystem reports one
    pub label: Option<String>,
    pub total_bytes: u64,
    /// e.g. "Syn HD (500 GB)"
    pub summary: String,
}
