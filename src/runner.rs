use std::process::Command;
use tracing::debug;

use crate::constants::tool;
use crate::error::{Error, Result};
use crate::transcript::Transcript;

/// Executes pre-tokenized tool command lines and records a transcript.
///
/// Arguments are always passed as an argument vector, never as a single
/// shell-interpolated string, so device names and property values containing
/// spaces or shell metacharacters survive intact.
pub trait ToolRunner {
    /// Run the tool with `args`, returning captured standard output.
    fn run(&mut self, args: &[&str]) -> Result<String>;

    fn transcript(&self) -> &Transcript;

    fn transcript_mut(&mut self) -> &mut Transcript;
}

/// Runs the real configuration tool as a blocking subprocess.
pub struct SubprocessRunner {
    binary: String,
    transcript: Transcript,
}

impl SubprocessRunner {
    pub fn new() -> Self {
        Self::with_binary(tool::BINARY)
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            transcript: Transcript::new(),
        }
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for SubprocessRunner {
    fn run(&mut self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.binary, args.join(" "));
        debug!(command = %command, "invoking external tool");

        let output = match Command::new(&self.binary).args(args).output() {
            Ok(output) => output,
            Err(err) => {
                return Err(Error::ExternalTool {
                    command,
                    code: None,
                    stderr: err.to_string(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        // Failed invocations are recorded too; the transcript exists for
        // exactly that kind of debugging.
        self.transcript.append(command.clone(), stdout.clone());

        if !output.status.success() {
            return Err(Error::ExternalTool {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(stdout)
    }

    fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}
