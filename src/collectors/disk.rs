//! Startup disk collection (root volume capacity and label)

use crate::data::DiskInfo;
use crate::utils::units::format_disk_capacity;
use std::ffi::CString;
use std::fs;

const DEFAULT_LABEL: &str = "Syn HD";
const MOUNTS_PATH: &str = "/proc/self/mounts";
const BY_LABEL_DIR: &str = "/dev/disk/by-label";

/// Collect root volume information from filesystem metadata
pub fn collect_disk_info() -> DiskInfo {
    let total_bytes = root_capacity_bytes().unwrap_or(0);
    let label = root_volume_label();

    DiskInfo {
        summary: summarize(label.as_deref(), total_bytes),
        label,
        total_bytes,
    }
}

fn summarize(label: Option<&str>, total_bytes: u64) -> String {
    format!(
        "{} ({})",
        label.unwrap_or(DEFAULT_LABEL),
        format_disk_capacity(total_bytes)
    )
}

/// Total capacity of the root filesystem via statvfs (no subprocess needed)
fn root_capacity_bytes() -> Option<u64> {
    let path = CString::new("/").ok()?;
    unsafe {
        let mut stat: libc::statvfs = std::mem::zeroed();
        if libc::statvfs(path.as_ptr(), &mut stat) == 0 {
            Some((stat.f_blocks as u64).wrapping_mul(stat.f_frsize as u64))
        } else {
            None
        }
    }
}

/// Resolve the root volume's label by matching the root mount's device
/// against the by-label symlink directory. Overlay and tmpfs roots have no
/// label and fall through to `None`.
fn root_volume_label() -> Option<String> {
    let mounts = fs::read_to_string(MOUNTS_PATH).ok()?;
    let device = root_device_from_mounts(&mounts)?;
    let device = fs::canonicalize(device).ok()?;

    for entry in fs::read_dir(BY_LABEL_DIR).ok()?.flatten() {
        if fs::canonicalize(entry.path()).is_ok_and(|target| target == device) {
            let name = entry.file_name();
            return Some(decode_label(&name.to_string_lossy()));
        }
    }
    None
}

/// Source device of the "/" mount. Later entries shadow earlier ones, so
/// the last match is the effective root.
fn root_device_from_mounts(mounts: &str) -> Option<String> {
    mounts
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = fields.next()?;
            (mount_point == "/").then(|| device.to_string())
        })
        .last()
}

/// Undo udev's `\xHH` escaping in by-label names ("My\x20Disk" -> "My Disk")
fn decode_label(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'x') {
            if let Some(value) = encoded
                .get(i + 2..i + 4)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            {
                out.push(value);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_volume_summary() {
        assert_eq!(summarize(Some("Data"), 2_000_000_000_000), "Data (2.00 TB)");
    }

    #[test]
    fn unlabeled_volume_gets_default_name() {
        assert_eq!(summarize(None, 500_000_000_000), "Syn HD (500 GB)");
    }

    #[test]
    fn root_device_takes_effective_mount() {
        let mounts = concat!(
            "proc /proc proc rw 0 0\n",
            "/dev/sda2 / ext4 rw,relatime 0 0\n",
            "tmpfs /tmp tmpfs rw 0 0\n",
        );
        assert_eq!(
            root_device_from_mounts(mounts).as_deref(),
            Some("/dev/sda2")
        );

        let shadowed = "/dev/sda2 / ext4 rw 0 0\n/dev/mapper/root / btrfs rw 0 0\n";
        assert_eq!(
            root_device_from_mounts(shadowed).as_deref(),
            Some("/dev/mapper/root")
        );
        assert_eq!(root_device_from_mounts("proc /proc proc rw 0 0\n"), None);
    }

    #[test]
    fn label_escapes_decode() {
        assert_eq!(decode_label("Syn\\x20HD"), "Syn HD");
        assert_eq!(decode_label("Data"), "Data");
        assert_eq!(decode_label("trailing\\x"), "trailing\\x");
    }
}
