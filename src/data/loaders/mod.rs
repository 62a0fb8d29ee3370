// mod.rs - Delimited table loader shared by distribution and synteny tables

use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Cell values treated as missing (pandas writes NaN as an empty cell)
const NULL_MARKERS: [&str; 6] = ["", "NA", "nan", "NaN", "None", "null"];

/// A header-addressed, fully materialized delimited table
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
}

/// Pick the field delimiter from the file extension (.csv is comma, everything else tab)
pub fn delimiter_for(file_path: &Path) -> u8 {
    match file_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("csv") => b',',
        _ => b'\t',
    }
}

/// Read a delimited table with a header row
pub fn read_table(file_path: &Path) -> Result<Table, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_for(file_path))
        .comment(Some(b'#'))
        .has_headers(true)
        .flexible(false)
        .from_path(file_path)
        .map_err(|e| format!("Failed to open table '{}': {}", file_path.display(), e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("Failed to read header of '{}': {}", file_path.display(), e))?
        .iter()
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect();

    if headers.is_empty() {
        return Err(format!("Empty table: {}", file_path.display()));
    }

    let mut records = Vec::new();
    for (line_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            format!(
                "Failed to read line {} of '{}': {}",
                line_num + 2,
                file_path.display(),
                e
            )
        })?;
        records.push(record);
    }

    Ok(Table { headers, records })
}

impl Table {
    /// Index of a required column
    pub fn column(&self, name: &str) -> Result<usize, String> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                format!(
                    "Missing required column '{}' (found: {})",
                    name,
                    self.headers.join(", ")
                )
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn is_null(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell.trim())
}

/// Parse a floating point cell; missing cells become NaN
pub fn parse_float(cell: &str) -> Result<f64, String> {
    let cleaned = cell.trim();
    if is_null(cleaned) {
        return Ok(f64::NAN);
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Failed to parse '{}' as a number", cleaned))
}

/// Parse a genomic coordinate; integral floats ("120.0") are accepted
pub fn parse_coordinate(cell: &str) -> Result<u64, String> {
    let cleaned = cell.trim();
    if let Ok(value) = cleaned.parse::<u64>() {
        return Ok(value);
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => Ok(value as u64),
        _ => Err(format!(
            "Failed to parse '{}' as a non-negative integer coordinate",
            cleaned
        )),
    }
}

/// Parse an optional name cell
pub fn parse_name(cell: &str) -> Option<String> {
    let cleaned = cell.trim().trim_matches('"');
    if is_null(cleaned) {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_by_extension() {
        assert_eq!(delimiter_for(Path::new("all.csv")), b',');
        assert_eq!(delimiter_for(Path::new("ALL.CSV")), b',');
        assert_eq!(delimiter_for(Path::new("ks.tsv")), b'\t');
        assert_eq!(delimiter_for(Path::new("segments")), b'\t');
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(" 1.5 ").unwrap(), 1.5);
        assert!(parse_float("").unwrap().is_nan());
        assert!(parse_float("NaN").unwrap().is_nan());
        assert!(parse_float("abc").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("120").unwrap(), 120);
        assert_eq!(parse_coordinate("120.0").unwrap(), 120);
        assert!(parse_coordinate("12.5").is_err());
        assert!(parse_coordinate("-3").is_err());
        assert!(parse_coordinate("").is_err());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("chr1"), Some("chr1".to_string()));
        assert_eq!(parse_name("\"chr2\""), Some("chr2".to_string()));
        assert_eq!(parse_name(""), None);
        assert_eq!(parse_name("nan"), None);
    }

    #[test]
    fn test_read_table_and_columns() {
        let path = std::env::temp_dir().join("wgdplot_loader_test.csv");
        std::fs::write(&path, "# produced upstream\na,b\n1,2\n3,4\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("b").unwrap(), 1);
        assert!(table.column("c").is_err());
        assert_eq!(&table.records[1][0], "3");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_table_rejects_ragged_rows() {
        let path = std::env::temp_dir().join("wgdplot_loader_ragged.tsv");
        std::fs::write(&path, "a\tb\n1\t2\n3\n").unwrap();
        assert!(read_table(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
