//! # Batch Rendering
//!
//! Reads the input table and writes one label PNG per record into an
//! output directory. Records are processed one at a time; fonts are loaded
//! once for the whole run.

use std::path::{Path, PathBuf};

use crate::compose::{Record, compose};
use crate::config::LayoutConfig;
use crate::error::SirocoError;
use crate::font::FontSet;
use crate::table;

/// Files written by a batch run, in table order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
}

/// Render every record of `input` into `output_dir`.
pub fn render_table(
    input: &Path,
    output_dir: &Path,
    config: &LayoutConfig,
) -> Result<BatchReport, SirocoError> {
    let table = table::read_records(input)?;
    tracing::info!("Columns: {:?}", table.headers);
    render_records(&table.records, output_dir, config)
}

/// Render `records` into `output_dir`, creating it if needed.
///
/// Records sharing a sanitized display name overwrite each other, last one wins.
pub fn render_records(
    records: &[Record],
    output_dir: &Path,
    config: &LayoutConfig,
) -> Result<BatchReport, SirocoError> {
    std::fs::create_dir_all(output_dir)?;
    let fonts = FontSet::load(&config.fonts);

    let mut report = BatchReport::default();
    for record in records {
        let label = compose(record, config, &fonts)?;
        let path = output_dir.join(table::output_file_name(&record.display_name));
        label
            .save(&path)
            .map_err(|e| SirocoError::Image(format!("Failed to save {}: {}", path.display(), e)))?;
        tracing::info!("Saved label: {}", path.display());
        report.written.push(path);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_records_writes_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images");
        let records = vec![
            Record {
                display_name: "Uno".to_string(),
                tag_text: "#a".to_string(),
                link1: Some("uno.example".to_string()),
                link2: None,
            },
            Record {
                display_name: "Dos".to_string(),
                tag_text: "#b".to_string(),
                link1: None,
                link2: Some("https://dos.example".to_string()),
            },
        ];

        let report = render_records(&records, &out, &LayoutConfig::default()).unwrap();
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.written[0], out.join("qr_layout_Uno.png"));

        let img = image::open(&report.written[1]).unwrap();
        assert_eq!((img.width(), img.height()), (800, 400));
    }

    #[test]
    fn test_render_table_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_table(
            &dir.path().join("gen.csv"),
            dir.path(),
            &LayoutConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SirocoError::Table(_)));
    }
}
