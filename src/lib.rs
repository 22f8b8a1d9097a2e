//! synabout library
//!
//! Gathers the "About This Computer" panel data on Linux desktops:
//! processor, memory, graphics, startup disk, and OS version, each as a
//! ready-to-display summary string.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod utils;

pub use data::{AboutInfo, DiskInfo, GraphicsInfo, MemoryInfo, OsVersionInfo, ProcessorInfo};
pub use error::{AboutError, Result};

/// Collect all panel information (parallelized; collectors are independent)
pub fn collect_about_info() -> AboutInfo {
    let ((processor, memory), (graphics, (disk, os))) = rayon::join(
        || {
            rayon::join(
                || collectors::processor::collect_processor_info(),
                || collectors::memory::collect_memory_info(),
            )
        },
        || {
            rayon::join(
                || collectors::graphics::collect_graphics_info(),
                || {
                    rayon::join(
                        || collectors::disk::collect_disk_info(),
                        || collectors::system::collect_os_version(),
                    )
                },
            )
        },
    );

    AboutInfo {
        processor,
        memory,
        graphics,
        disk,
        os,
    }
}
