//! Graphics adapter collection (lspci machine-readable mode)

use super::COMMAND_TIMEOUT;
use crate::data::GraphicsInfo;
use crate::utils::command::run_command_with_timeout;
use crate::utils::parsing::{extract_fields, FieldRule};

const FALLBACK_NAME: &str = "Graphics Controller";

const DEVICE_RULES: &[FieldRule] = &[
    FieldRule { prefix: "Vendor:", name: "vendor" },
    FieldRule { prefix: "Device:", name: "device" },
];

/// Collect the primary display adapter from `lspci -vmm`
pub fn collect_graphics_info() -> GraphicsInfo {
    let output =
        run_command_with_timeout("lspci", &["-vmm"], COMMAND_TIMEOUT).unwrap_or_default();
    parse_graphics_output(&output)
}

pub(crate) fn parse_graphics_output(output: &str) -> GraphicsInfo {
    // One block per device, blank-line separated. The first display-class
    // block that carries both names is taken as the primary adapter;
    // multi-GPU systems are not disambiguated further.
    for block in output.split("\n\n") {
        if !is_display_block(block) {
            continue;
        }
        let fields = extract_fields(block, DEVICE_RULES);
        if let (Some(vendor), Some(device)) = (fields.get("vendor"), fields.get("device")) {
            return GraphicsInfo {
                summary: display_name(vendor, device),
                vendor: Some(vendor.clone()),
                device: Some(device.clone()),
            };
        }
    }

    GraphicsInfo {
        vendor: None,
        device: None,
        summary: FALLBACK_NAME.to_string(),
    }
}

fn is_display_block(block: &str) -> bool {
    block.contains("VGA compatible controller") || block.contains("3D controller")
}

/// "<vendor> <device>", except when the device name already leads with the
/// vendor ("Intel Corporation" / "Intel Iris Xe Graphics" must not render
/// as "Intel Intel ...").
fn display_name(vendor: &str, device: &str) -> String {
    let leading = device.get(..vendor.len());
    if leading.is_some_and(|prefix| prefix.eq_ignore_ascii_case(vendor)) {
        device.to_string()
    } else {
        format!("{} {}", vendor, device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_prefix_of_device_collapses() {
        let output = concat!(
            "Slot:\t00:02.0\n",
            "Class:\tVGA compatible controller\n",
            "Vendor:\tIntel\n",
            "Device:\tIntel Iris Xe Graphics\n",
        );
        let info = parse_graphics_output(output);
        assert_eq!(info.summary, "Intel Iris Xe Graphics");
    }

    #[test]
    fn distinct_vendor_and_device_concatenate() {
        let output = concat!(
            "Slot:\t01:00.0\n",
            "Class:\tVGA compatible controller\n",
            "Vendor:\tNVIDIA\n",
            "Device:\tGA102 [GeForce RTX 3080]\n",
        );
        let info = parse_graphics_output(output);
        assert_eq!(info.summary, "NVIDIA GA102 [GeForce RTX 3080]");
    }

    #[test]
    fn non_display_blocks_are_ignored() {
        let output = concat!(
            "Slot:\t00:1f.3\n",
            "Class:\tAudio device\n",
            "Vendor:\tIntel Corporation\n",
            "Device:\tCannon Lake PCH cAVS\n",
            "\n",
            "Slot:\t01:00.0\n",
            "Class:\t3D controller\n",
            "Vendor:\tNVIDIA Corporation\n",
            "Device:\tGP108M [GeForce MX150]\n",
        );
        let info = parse_graphics_output(output);
        assert_eq!(info.summary, "NVIDIA Corporation GP108M [GeForce MX150]");
    }

    #[test]
    fn incomplete_display_block_falls_through_to_next() {
        let output = concat!(
            "Class:\tVGA compatible controller\n",
            "Vendor:\tRed Hat, Inc.\n",
            "\n",
            "Class:\tVGA compatible controller\n",
            "Vendor:\tIntel Corporation\n",
            "Device:\tUHD Graphics 620\n",
        );
        let info = parse_graphics_output(output);
        assert_eq!(info.summary, "Intel Corporation UHD Graphics 620");
    }

    #[test]
    fn no_adapter_yields_generic_fallback() {
        assert_eq!(parse_graphics_output("").summary, FALLBACK_NAME);
        let output = "Class:\tAudio device\nVendor:\tIntel\nDevice:\tHDA\n";
        assert_eq!(parse_graphics_output(output).summary, FALLBACK_NAME);
    }
}
