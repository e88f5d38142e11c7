//! Host integration: where exports go by default and how they are opened

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait Desktop {
    /// Directory used when no output directory is configured
    fn default_output_dir(&self) -> PathBuf;

    /// Show a finished document to the user
    fn open_document(&self, path: &Path) -> io::Result<()>;
}

/// The user's desktop session: documents folder and the system file opener
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDesktop;

impl Desktop for NativeDesktop {
    fn default_output_dir(&self) -> PathBuf {
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn open_document(&self, path: &Path) -> io::Result<()> {
        opener_command(path).spawn().map(|_| ())
    }
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Fixed output directory and no viewer, for scripts and tests
#[derive(Debug, Clone)]
pub struct HeadlessDesktop {
    pub output_dir: PathBuf,
}

impl HeadlessDesktop {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Desktop for HeadlessDesktop {
    fn default_output_dir(&self) -> PathBuf {
        self.output_dir.clone()
    }

    fn open_document(&self, path: &Path) -> io::Result<()> {
        log::debug!("Not opening {} (headless)", path.display());
        Ok(())
    }
}
