//! External viewer invocation.

use std::path::Path;
use std::process::Command;

use dupemap_core::Viewer;

/// Viewer that shells out to a display command with the filename as its only
/// argument and waits for it to exit.
pub struct CommandViewer {
    program: String,
}

impl CommandViewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Viewer for CommandViewer {
    fn view(&self, path: &Path) {
        // Best-effort: the display command's outcome is not surfaced.
        let _ = Command::new(&self.program).arg(path).status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_swallows_missing_command() {
        let viewer = CommandViewer::new("dupemap-no-such-command");
        // Must not panic or surface the spawn failure.
        viewer.view(Path::new("whatever.jpg"));
    }
}
