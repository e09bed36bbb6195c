//! Plain-text rendering of the device tree, property tables and transcript.
//!
//! Pure string building, no I/O; the caller decides where it goes.

use crate::device::{Device, Property};
use crate::settings::Settings;
use crate::transcript::Transcript;
use crate::tree::TreeNode;

const TRANSCRIPT_SEPARATOR: &str = "\n\n========== SEPARATOR ==========\n\n";

pub fn render_tree(nodes: &[TreeNode], settings: &Settings) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&device_line(&node.device, settings, false));
        out.push('\n');
        for child in &node.children {
            out.push_str(&device_line(child, settings, true));
            out.push('\n');
        }
    }
    out
}

fn device_line(device: &Device, settings: &Settings, indented: bool) -> String {
    let mut line = String::new();
    if indented {
        line.push_str("    ↳ ");
    }
    if !settings.hide_device_ids {
        line.push_str(&format!("[{}] ", device.id));
    }
    line.push_str(&device.name);
    if device.is_master {
        line.push_str(&format!(" (master {})", device.device_type));
    } else {
        line.push_str(&format!(" ({})", device.device_type));
    }
    line
}

pub fn render_props(device: &Device, settings: &Settings) -> String {
    let mut out = String::new();

    if settings.vertical_layout {
        for prop in &device.properties {
            out.push_str(&prop_label(prop, settings));
            out.push('\n');
            out.push_str(&format!("    {}\n", prop.value));
        }
        return out;
    }

    let width = device
        .properties
        .iter()
        .map(|prop| prop_label(prop, settings).chars().count())
        .max()
        .unwrap_or(0);
    for prop in &device.properties {
        let label = prop_label(prop, settings);
        out.push_str(&format!("{label:<width$}  {}\n", prop.value));
    }
    out
}

fn prop_label(prop: &Property, settings: &Settings) -> String {
    if settings.hide_device_props {
        prop.name.clone()
    } else {
        format!("{} ({})", prop.name, prop.id)
    }
}

pub fn render_transcript(transcript: &Transcript) -> String {
    transcript
        .entries()
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join(TRANSCRIPT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceType;
    use crate::tree::group_by_master;

    fn sample_devices() -> Vec<Device> {
        vec![
            Device {
                id: 2,
                name: "Virtual core pointer".into(),
                device_type: DeviceType::Pointer,
                is_master: true,
                properties: Vec::new(),
            },
            Device {
                id: 10,
                name: "USB Optical Mouse".into(),
                device_type: DeviceType::Pointer,
                is_master: false,
                properties: vec![
                    Property {
                        id: 141,
                        name: "Device Enabled".into(),
                        value: "1".into(),
                    },
                    Property {
                        id: 271,
                        name: "Device Accel Profile".into(),
                        value: "0".into(),
                    },
                ],
            },
        ]
    }

    #[test]
    fn test_tree_indents_slaves_under_master() {
        let tree = group_by_master(&sample_devices());
        let settings = Settings::default();
        let rendered = render_tree(&tree, &settings);
        assert_eq!(
            rendered,
            "Virtual core pointer (master pointer)\n    ↳ USB Optical Mouse (pointer)\n"
        );
    }

    #[test]
    fn test_tree_shows_ids_when_not_hidden() {
        let tree = group_by_master(&sample_devices());
        let settings = Settings {
            hide_device_ids: false,
            ..Settings::default()
        };
        let rendered = render_tree(&tree, &settings);
        assert!(rendered.starts_with("[2] Virtual core pointer"));
        assert!(rendered.contains("↳ [10] USB Optical Mouse"));
    }

    #[test]
    fn test_props_columnar_with_ids() {
        let devices = sample_devices();
        let settings = Settings {
            hide_device_props: false,
            ..Settings::default()
        };
        let rendered = render_props(&devices[1], &settings);
        assert_eq!(
            rendered,
            "Device Enabled (141)        1\nDevice Accel Profile (271)  0\n"
        );
    }

    #[test]
    fn test_props_vertical_layout_stacks_values() {
        let devices = sample_devices();
        let settings = Settings {
            vertical_layout: true,
            ..Settings::default()
        };
        let rendered = render_props(&devices[1], &settings);
        assert_eq!(
            rendered,
            "Device Enabled\n    1\nDevice Accel Profile\n    0\n"
        );
    }

    #[test]
    fn test_transcript_entries_joined_with_separator() {
        let mut transcript = Transcript::new();
        transcript.append("xinput list --id-only".into(), "2\n".into());
        transcript.append("xinput list --name-only 2".into(), "Virtual core pointer\n".into());
        let rendered = render_transcript(&transcript);
        assert!(rendered.contains("========== SEPARATOR =========="));
        assert!(rendered.starts_with("COMMAND:\nxinput list --id-only"));
    }
}
