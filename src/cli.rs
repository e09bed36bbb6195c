use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "xinputctl",
    version,
    about = "Inspect and modify X11 input devices through the xinput tool"
)]
pub struct Cli {
    /// Print the session's tool transcript after the command
    #[arg(long, global = true)]
    pub transcript: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the device tree: masters with their slaves, floating devices last
    List,

    /// List a device's properties
    Props {
        device_id: u32,
    },

    /// Show the tool's raw info listing for a device
    Info {
        device_id: u32,
    },

    /// Set a device property to a new value
    SetProp {
        device_id: u32,
        prop_id: u32,
        value: String,
    },

    /// Detach a slave device from its master
    Float {
        device_id: u32,
    },

    /// Reattach a slave device to a master
    Reattach {
        device_id: u32,
        master_id: u32,
    },

    /// Create a new master device pair
    CreateMaster {
        name: String,
    },

    /// Remove a master device
    RemoveMaster {
        device_id: u32,
    },

    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show,

    /// Set one boolean settings key
    Set {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_set_prop_with_spaced_value() {
        let cli = Cli::parse_from(["xinputctl", "set-prop", "10", "271", "1, 0, 0"]);
        match cli.command {
            Command::SetProp {
                device_id,
                prop_id,
                value,
            } => {
                assert_eq!(device_id, 10);
                assert_eq!(prop_id, 271);
                assert_eq!(value, "1, 0, 0");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_transcript_flag_is_global() {
        let cli = Cli::parse_from(["xinputctl", "list", "--transcript"]);
        assert!(cli.transcript);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_parses_settings_set_bool() {
        let cli = Cli::parse_from(["xinputctl", "settings", "set", "vertical_layout", "true"]);
        match cli.command {
            Command::Settings {
                action: SettingsAction::Set { key, value },
            } => {
                assert_eq!(key, "vertical_layout");
                assert!(value);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
