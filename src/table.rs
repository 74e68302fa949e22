//! # Input Table
//!
//! Reads the CSV export of the artist sheet. Only four columns matter:
//!
//! | Column | Field |
//! |--------|-------|
//! | `NOMBRE ARTÍSTICO` | [`Record::display_name`] (required) |
//! | `#género #disciplina` | [`Record::tag_text`] (required) |
//! | `LINK_WEB_1` | [`Record::link1`] |
//! | `LINK_WEB_2` | [`Record::link2`] |
//!
//! Other columns are ignored. Empty link cells become `None`.

use std::io::Read;
use std::path::Path;

use crate::compose::Record;
use crate::error::SirocoError;

pub const DISPLAY_NAME_COLUMN: &str = "NOMBRE ARTÍSTICO";
pub const TAG_COLUMN: &str = "#género #disciplina";
pub const LINK1_COLUMN: &str = "LINK_WEB_1";
pub const LINK2_COLUMN: &str = "LINK_WEB_2";

/// Parsed table: the header row as read plus one record per usable row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Read records from a CSV file.
pub fn read_records(path: &Path) -> Result<Table, SirocoError> {
    let file = std::fs::File::open(path).map_err(|e| {
        SirocoError::Table(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_from(file)
}

/// Read records from any CSV source.
pub fn read_from<R: Read>(source: R) -> Result<Table, SirocoError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SirocoError::Table(format!("Failed to read header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &str| {
        column(name).ok_or_else(|| SirocoError::Table(format!("Missing column '{}'", name)))
    };

    let name_idx = required(DISPLAY_NAME_COLUMN)?;
    let tag_idx = required(TAG_COLUMN)?;
    let link1_idx = column(LINK1_COLUMN);
    let link2_idx = column(LINK2_COLUMN);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let row_number = row + 2;
        let row = result
            .map_err(|e| SirocoError::Table(format!("Row {}: {}", row_number, e)))?;

        let cell = |idx: usize| row.get(idx).unwrap_or("");
        let link = |idx: Option<usize>| {
            idx.map(cell)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        let display_name = cell(name_idx);
        if display_name.trim().is_empty() {
            tracing::warn!("Skipping row {}: empty {}", row_number, DISPLAY_NAME_COLUMN);
            continue;
        }

        records.push(Record {
            display_name: display_name.to_string(),
            tag_text: cell(tag_idx).to_string(),
            link1: link(link1_idx),
            link2: link(link2_idx),
        });
    }

    Ok(Table { headers, records })
}

/// File name for a label: `qr_layout_<name>.png`, keeping only letters,
/// digits, spaces, `-` and `_` from the display name.
pub fn output_file_name(display_name: &str) -> String {
    let name: String = display_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    format!("qr_layout_{}.png", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "\
Marca temporal,NOMBRE ARTÍSTICO,#género #disciplina,LINK_WEB_1,LINK_WEB_2
1,La Banda,#cumbia #música,https://labanda.example,@labanda
2,DJ Sur,#techno,surdj.example,
3,,#nada,,
4,\"Coro, Norte\",,,
";

    #[test]
    fn test_reads_records() {
        let table = read_from(SHEET.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(
            table.records,
            vec![
                Record {
                    display_name: "La Banda".to_string(),
                    tag_text: "#cumbia #música".to_string(),
                    link1: Some("https://labanda.example".to_string()),
                    link2: Some("@labanda".to_string()),
                },
                Record {
                    display_name: "DJ Sur".to_string(),
                    tag_text: "#techno".to_string(),
                    link1: Some("surdj.example".to_string()),
                    link2: None,
                },
                Record {
                    display_name: "Coro, Norte".to_string(),
                    tag_text: String::new(),
                    link1: None,
                    link2: None,
                },
            ]
        );
    }

    #[test]
    fn test_display_name_is_kept_as_written() {
        let csv = "NOMBRE ARTÍSTICO,#género #disciplina\n\" La Banda \",#cumbia\n\"   \",#nada\n";
        let table = read_from(csv.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].display_name, " La Banda ");
        assert_eq!(
            output_file_name(&table.records[0].display_name),
            "qr_layout_ La Banda .png"
        );
    }

    #[test]
    fn test_link_columns_are_optional() {
        let table = read_from("NOMBRE ARTÍSTICO,#género #disciplina\nSolo,#folk\n".as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].link1, None);
        assert_eq!(table.records[0].link2, None);
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "NOMBRE ARTÍSTICO,#género #disciplina,LINK_WEB_1,LINK_WEB_2\nCorto,#jazz\n";
        let table = read_from(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].display_name, "Corto");
        assert_eq!(table.records[0].link1, None);
    }

    #[test]
    fn test_missing_required_column() {
        let err = read_from("NOMBRE,LINK_WEB_1\nx,y\n".as_bytes()).unwrap_err();
        match err {
            SirocoError::Table(msg) => assert!(msg.contains(DISPLAY_NAME_COLUMN)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_records(Path::new("/nonexistent/gen.csv")).unwrap_err();
        assert!(matches!(err, SirocoError::Table(_)));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("La Banda"), "qr_layout_La Banda.png");
        assert_eq!(output_file_name("DJ-Sur_2"), "qr_layout_DJ-Sur_2.png");
        assert_eq!(output_file_name("Coro/Norte: ¡Ñandú! 🎵"), "qr_layout_CoroNorte Ñandú .png");
        assert_eq!(output_file_name("../../etc"), "qr_layout_etc.png");
    }
}
