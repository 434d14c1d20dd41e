use std::{io, path::Path, process::Command};

/// Presents a written image to the user.
pub trait Viewer {
    fn show(&mut self, path: &Path) -> io::Result<()>;
}

/// Hands the file to the platform's default opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn show(&mut self, path: &Path) -> io::Result<()> {
        let mut command = opener_command();
        command.arg(path);
        log::debug!("Running {:?}", command);
        // the opener is detached, its exit status says nothing about the viewer
        command.spawn().map(|_| ())
    }
}

#[cfg(target_os = "macos")]
fn opener_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command() -> Command {
    Command::new("xdg-open")
}

/// Viewer for headless runs: does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn show(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
