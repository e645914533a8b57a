//! Platform share targets for the terminal

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Result};
use arboard::Clipboard;
use daily_quotes_core::ShareTarget;

/// External share command that reads the text on stdin
#[derive(Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    /// Build from a configured argv; `None` when the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ShareTarget for CommandShare {
    fn send_text(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow!("Failed to run {}: {}", self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(anyhow!("{} exited with {}", self.program, status));
        }
        Ok(())
    }
}

/// System clipboard. Kept alive for the whole session since some platforms
/// drop the contents when the handle goes away.
pub struct ClipboardShare {
    clipboard: Clipboard,
}

impl ClipboardShare {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new()
            .map_err(|e| anyhow!("Failed to open clipboard: {}", e))?;
        Ok(Self { clipboard })
    }
}

impl ShareTarget for ClipboardShare {
    fn send_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))
    }
}
