//! Shift export to CSV or JSON files.
//!
//! Every field is written as stored, so a CSV export can be read back
//! column for column.

use crate::libs::shift::Shift;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// One shift with its columns exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportShift {
    pub id: i64,
    pub date: String,
    pub shift_span: String,
    pub break_total: String,
    pub shift_total: String,
}

impl From<&Shift> for ExportShift {
    fn from(shift: &Shift) -> Self {
        ExportShift {
            id: shift.id.unwrap_or(0),
            date: shift.date_label(),
            shift_span: shift.span.to_string(),
            break_total: shift.break_total.to_string(),
            shift_total: shift.shift_total.to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("shiftlog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `shifts` and returns the file written.
    pub fn export(&self, shifts: &[Shift]) -> Result<&Path> {
        let rows: Vec<ExportShift> = shifts.iter().map(ExportShift::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        Ok(&self.output_path)
    }

    fn export_csv(&self, rows: &[ExportShift]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        // Header is written explicitly so an empty export still carries it.
        wtr.write_record(["id", "date", "shiftSpan", "breakTotal", "shiftTotal"])?;

        for row in rows {
            wtr.write_record([
                row.id.to_string(),
                row.date.clone(),
                row.shift_span.clone(),
                row.break_total.clone(),
                row.shift_total.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
