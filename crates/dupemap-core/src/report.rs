//! Report emission and the external viewer seam.

use std::io::{self, Write};
use std::path::Path;

use crate::groups::DuplicateReport;

/// External display action invoked once per reported filename.
///
/// Invocations are best-effort and synchronous; the outcome is not surfaced.
pub trait Viewer {
    fn view(&self, path: &Path);
}

/// Viewer that does nothing. Used by tests and `--no-view`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn view(&self, _path: &Path) {}
}

/// Write the text report.
///
/// For each group: the checksum on its own line, then each member as
/// ` - <filename>`. The viewer runs per filename as its line is written, so
/// preview order matches report order.
pub fn write_text_report<W: Write>(
    report: &DuplicateReport,
    out: &mut W,
    viewer: &dyn Viewer,
) -> io::Result<()> {
    for group in &report.groups {
        writeln!(out, "{}", group.checksum)?;
        for path in &group.paths {
            writeln!(out, " - {}", path.display())?;
            viewer.view(path);
        }
    }
    Ok(())
}

/// Invoke the viewer for every reported filename without writing anything.
pub fn view_report(report: &DuplicateReport, viewer: &dyn Viewer) {
    for group in &report.groups {
        for path in &group.paths {
            viewer.view(path);
        }
    }
}
