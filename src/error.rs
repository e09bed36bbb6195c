use thiserror::Error;

/// Failures crossing the boundary to the external configuration tool.
///
/// Tool invocations are fire-once: nothing here is retried, and parse
/// failures are never silently skipped or defaulted. Callers surface these
/// to the user together with the failing command.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool could not be launched, was killed, or exited non-zero.
    /// `code` is `None` when there is no exit code (spawn failure, signal).
    #[error("`{command}` failed (exit code {code:?}): {stderr}")]
    ExternalTool {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Tool output did not match the expected line grammar. Usually a tool
    /// version mismatch; the offending line is kept verbatim.
    #[error("could not parse output of `{command}`, offending line: {line:?}")]
    Parse { command: String, line: String },
}

impl Error {
    pub(crate) fn parse(command: &str, line: &str) -> Self {
        Error::Parse {
            command: command.to_owned(),
            line: line.to_owned(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
