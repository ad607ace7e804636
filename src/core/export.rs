//! # Export Toolbar
//!
//! Stage-then-commit selection: the user edits two fields locally and the
//! combination leaves the toolbar only on `confirm()`.
//!
//! ```text
//! set_type / set_format ──► staged (no message)
//! confirm()             ──► ExportConfiguration { type, format }
//! ```
//!
//! Confirming twice in a row yields two identical configurations. Nothing
//! is deduplicated here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which columns go into an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportType {
    #[default]
    AllFields,
    ProgressOnly,
    ScoresOnly,
}

impl ExportType {
    pub const ALL: [ExportType; 3] = [
        ExportType::AllFields,
        ExportType::ProgressOnly,
        ExportType::ScoresOnly,
    ];

    /// Cycles to the next type (wraps around)
    pub fn next(self) -> ExportType {
        match self {
            ExportType::AllFields => ExportType::ProgressOnly,
            ExportType::ProgressOnly => ExportType::ScoresOnly,
            ExportType::ScoresOnly => ExportType::AllFields,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportType::AllFields => "All fields",
            ExportType::ProgressOnly => "Progress only",
            ExportType::ScoresOnly => "Scores only",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ExportType::AllFields => "all-fields",
            ExportType::ProgressOnly => "progress-only",
            ExportType::ScoresOnly => "scores-only",
        }
    }
}

/// File format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Xlsx];

    pub fn next(self) -> ExportFormat {
        match self {
            ExportFormat::Csv => ExportFormat::Xlsx,
            ExportFormat::Xlsx => ExportFormat::Csv,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "Excel (.xlsx)",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// The payload handed to the consumer when an export is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfiguration {
    #[serde(rename = "type")]
    pub export_type: ExportType,
    pub format: ExportFormat,
}

impl fmt::Display for ExportConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} as {}", self.export_type.id(), self.format.extension())
    }
}

/// Buffered export fields.
#[derive(Debug, Clone, Default)]
pub struct ExportToolbar {
    staged: ExportConfiguration,
}

impl ExportToolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> ExportConfiguration {
        self.staged
    }

    pub fn export_type(&self) -> ExportType {
        self.staged.export_type
    }

    pub fn format(&self) -> ExportFormat {
        self.staged.format
    }

    pub fn set_type(&mut self, export_type: ExportType) {
        self.staged.export_type = export_type;
    }

    pub fn set_format(&mut self, format: ExportFormat) {
        self.staged.format = format;
    }

    pub fn cycle_type(&mut self) {
        self.staged.export_type = self.staged.export_type.next();
    }

    pub fn cycle_format(&mut self) {
        self.staged.format = self.staged.format.next();
    }

    /// Packages the staged fields. The staged values are kept as they are.
    pub fn confirm(&self) -> ExportConfiguration {
        self.staged
    }
}
