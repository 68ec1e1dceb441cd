//! Core types for dupemap.
//!
//! This crate parses checksum manifests (lines of `<checksum>\t<filename>`),
//! groups filenames by checksum in encounter order, and renders the duplicate
//! report. The external preview action is abstracted behind the [`Viewer`]
//! trait so frontends can shell out while tests record invocations.
//!
//! ```rust,ignore
//! use dupemap_core::{load_path, NoopViewer, ReportConfig};
//!
//! let table = load_path("checksums.tsv")?;
//! let report = table.into_report(&ReportConfig::default());
//!
//! let mut out = Vec::new();
//! dupemap_core::write_text_report(&report, &mut out, &NoopViewer)?;
//! ```

mod config;
mod error;
mod groups;
mod manifest;
mod report;

pub use config::{ReportConfig, ReportConfigBuilder};
pub use error::ManifestError;
pub use groups::{DuplicateGroup, DuplicateReport, GroupTable};
pub use manifest::{ManifestEntry, SENTINEL, load_path, load_reader};
pub use report::{NoopViewer, Viewer, view_report, write_text_report};
