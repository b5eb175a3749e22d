use std::io::ErrorKind;
use std::process::Command;

use tailor_core::ClipboardError;
use tailor_logging::tailor_debug;

pub trait ClipboardReader: Send + Sync {
    fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Reads the clipboard by running an external tool and capturing its stdout.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// `command[0]` is the program, the rest are its arguments.
    pub fn new(command: &[String]) -> Self {
        let (program, args) = match command.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            None => (String::new(), Vec::new()),
        };
        Self { program, args }
    }
}

impl ClipboardReader for CommandClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        if self.program.is_empty() {
            return Err(ClipboardError::Unavailable(
                "no clipboard command configured".to_string(),
            ));
        }
        tailor_debug!("Reading clipboard via {}", self.program);

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::PermissionDenied => ClipboardError::PermissionDenied,
                _ => ClipboardError::Unavailable(format!("{}: {}", self.program, err)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipboardError::Unavailable(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotText)
    }
}
