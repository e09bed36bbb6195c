use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::classify;
use crate::error::{Error, Result};

/// Device classification derived from the tool's short listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Floating,
    Pointer,
    Keyboard,
}

impl DeviceType {
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Floating => "floating",
            DeviceType::Pointer => "pointer",
            DeviceType::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named driver configuration value.
///
/// `value` stays the tool's formatted string (integer, float, atom or array
/// alike); this layer never parses it into a richer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub value: String,
}

impl Property {
    /// Render back into the tool's `name (id):value` listing form.
    pub fn listing_line(&self) -> String {
        format!("{} ({}):{}", self.name, self.id, self.value)
    }
}

/// One input device as reported by the tool.
///
/// Instances are rebuilt wholesale on every refresh; IDs and hierarchy can
/// change underneath us at any moment (hot-plug), so holding one across a
/// refresh is a use-after-invalidation bug. Re-fetch by ID instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: u32,
    pub name: String,
    pub device_type: DeviceType,
    pub is_master: bool,
    pub properties: Vec<Property>,
}

fn digit_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digit run pattern is valid"))
}

fn prop_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy `.+` pins the match to the *last* ` (digits):` occurrence, so
    // property names containing parenthesized digits still parse.
    RE.get_or_init(|| Regex::new(r"^(.+) \((\d+)\):(.*)$").expect("prop line pattern is valid"))
}

/// Extract a device ID from one line of `list --id-only` output.
///
/// Lines may carry stray non-digit characters; the first run of digits wins.
/// A line with no digits at all is a parse failure, never a skipped entry.
pub fn parse_device_id(line: &str, command: &str) -> Result<u32> {
    let digits = digit_run_regex()
        .find(line)
        .ok_or_else(|| Error::parse(command, line))?;
    digits
        .as_str()
        .parse()
        .map_err(|_| Error::parse(command, line))
}

/// Classify a device from its `list --short` output.
///
/// Pure substring search, case-sensitive: `floating` beats `pointer`,
/// anything else is a keyboard; `master` is an independent flag.
pub fn classify_short_listing(output: &str) -> (DeviceType, bool) {
    let device_type = if output.contains(classify::FLOATING) {
        DeviceType::Floating
    } else if output.contains(classify::POINTER) {
        DeviceType::Pointer
    } else {
        DeviceType::Keyboard
    };
    (device_type, output.contains(classify::MASTER))
}

/// Parse a full `list-props` output block into properties, in source order.
///
/// The first line is a header naming the device and is discarded. Every
/// remaining line must match `name (id):value` after tab stripping; a line
/// that does not fails the whole call, because malformed output means a tool
/// version mismatch the caller must know about.
pub fn parse_prop_listing(output: &str, command: &str) -> Result<Vec<Property>> {
    let mut properties = Vec::new();

    for line in output.lines().skip(1) {
        let stripped = line.replace('\t', "");
        let caps = prop_line_regex()
            .captures(&stripped)
            .ok_or_else(|| Error::parse(command, line))?;
        let id = caps[2].parse().map_err(|_| Error::parse(command, line))?;
        properties.push(Property {
            id,
            name: caps[1].trim().to_owned(),
            value: caps[3].trim().to_owned(),
        });
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_id_plain() {
        assert_eq!(parse_device_id("12", "cmd").unwrap(), 12);
    }

    #[test]
    fn test_parse_device_id_with_stray_characters() {
        assert_eq!(parse_device_id("∼ 7 ⎡", "cmd").unwrap(), 7);
        assert_eq!(parse_device_id("id=15:", "cmd").unwrap(), 15);
    }

    #[test]
    fn test_parse_device_id_first_digit_run_wins() {
        assert_eq!(parse_device_id("x3y44", "cmd").unwrap(), 3);
    }

    #[test]
    fn test_parse_device_id_no_digits_is_parse_error() {
        let err = parse_device_id("no ids here", "xinput list --id-only").unwrap_err();
        match err {
            Error::Parse { command, line } => {
                assert_eq!(command, "xinput list --id-only");
                assert_eq!(line, "no ids here");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_master_pointer() {
        let line = "Virtual core pointer                    \tid=2\t[master pointer  (3)]";
        let (device_type, is_master) = classify_short_listing(line);
        assert_eq!(device_type, DeviceType::Pointer);
        assert!(is_master);
    }

    #[test]
    fn test_classify_slave_keyboard() {
        let line = "AT Translated Set 2 keyboard            \tid=11\t[slave  keyboard (3)]";
        let (device_type, is_master) = classify_short_listing(line);
        assert_eq!(device_type, DeviceType::Keyboard);
        assert!(!is_master);
    }

    #[test]
    fn test_classify_floating_beats_pointer() {
        let line = "SynPS/2 Synaptics TouchPad              \tid=13\t[floating slave]";
        let (device_type, is_master) = classify_short_listing(line);
        assert_eq!(device_type, DeviceType::Floating);
        assert!(!is_master);
    }

    #[test]
    fn test_parse_prop_listing_basic() {
        let output = "Device 'AT Translated Set 2 keyboard':\n\
                      \tDevice Enabled (141):\t1\n\
                      \tCoordinate Transformation Matrix (143):\t1.000000, 0.000000, 0.000000\n";
        let props = parse_prop_listing(output, "xinput list-props 11").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(
            props[0],
            Property {
                id: 141,
                name: "Device Enabled".into(),
                value: "1".into(),
            }
        );
        assert_eq!(props[1].id, 143);
        assert_eq!(props[1].value, "1.000000, 0.000000, 0.000000");
    }

    #[test]
    fn test_parse_prop_listing_name_with_parenthesized_digits() {
        // Only the last ` (digits):` is the ID separator.
        let output = "header\n\tlibinput Accel Speed (2) (285):\t0.5\n";
        let props = parse_prop_listing(output, "cmd").unwrap();
        assert_eq!(props[0].name, "libinput Accel Speed (2)");
        assert_eq!(props[0].id, 285);
        assert_eq!(props[0].value, "0.5");
    }

    #[test]
    fn test_parse_prop_listing_preserves_source_order() {
        let output = "header\n\tB Prop (9):\tb\n\tA Prop (3):\ta\n";
        let props = parse_prop_listing(output, "cmd").unwrap();
        assert_eq!(props[0].id, 9);
        assert_eq!(props[1].id, 3);
    }

    #[test]
    fn test_parse_prop_listing_malformed_line_fails_whole_call() {
        let output = "header\n\tDevice Enabled (141):\t1\n\tgarbage without id\n";
        let err = parse_prop_listing(output, "xinput list-props 11").unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, "\tgarbage without id"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_prop_listing_header_only_is_empty() {
        let props = parse_prop_listing("Device 'x':\n", "cmd").unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_prop_round_trip_reproduces_stripped_line() {
        let original = "\tDevice Enabled (141):1";
        let stripped = original.replace('\t', "");
        let output = format!("header\n{original}\n");
        let props = parse_prop_listing(&output, "cmd").unwrap();
        assert_eq!(props[0].listing_line(), stripped);
    }
}
