//! Application-wide constants
//!
//! Single source of truth for the external tool's command surface and the
//! string literals used to interpret its output.

/// External tool invocation constants
pub mod tool {
    /// Name of the external configuration tool binary
    pub const BINARY: &str = "xinput";

    /// Listing subcommand (devices, raw device info)
    pub const LIST: &str = "list";

    /// `list` flag: one device ID per line
    pub const ID_ONLY: &str = "--id-only";

    /// `list` flag: device name only
    pub const NAME_ONLY: &str = "--name-only";

    /// `list` flag: one-line device summary used for classification
    pub const SHORT: &str = "--short";

    /// Property listing subcommand
    pub const LIST_PROPS: &str = "list-props";

    /// Property mutation subcommand
    pub const SET_PROP: &str = "set-prop";

    /// Detach-a-slave subcommand
    pub const FLOAT: &str = "float";

    /// Attach-slave-to-master subcommand
    pub const REATTACH: &str = "reattach";

    /// Master creation subcommand
    pub const CREATE_MASTER: &str = "create-master";

    /// Master removal subcommand
    pub const REMOVE_MASTER: &str = "remove-master";
}

/// Literal substrings searched for in `list --short` output (case-sensitive)
pub mod classify {
    /// Marks a detached slave device
    pub const FLOATING: &str = "floating";

    /// Marks a pointer device
    pub const POINTER: &str = "pointer";

    /// Marks a master (virtual) device
    pub const MASTER: &str = "master";
}

/// Settings file location constants
pub mod config {
    /// Directory under the user config dir
    pub const APP_DIR: &str = "xinputctl";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}
