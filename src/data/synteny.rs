// synteny.rs - Aligned segment (synteny) tables

use crate::data::loaders::{self, parse_coordinate, parse_name};
use std::path::Path;

pub const LIST_X_COLUMN: &str = "list_x";
pub const LIST_Y_COLUMN: &str = "list_y";
pub const BEGIN_X_COLUMN: &str = "begin_x";
pub const END_X_COLUMN: &str = "end_x";
pub const BEGIN_Y_COLUMN: &str = "begin_y";
pub const END_Y_COLUMN: &str = "end_y";

/// One aligned block as read from the table; names may be omitted
#[derive(Debug, Clone, PartialEq)]
pub struct SyntenyRow {
    pub list_x: Option<String>,
    pub list_y: Option<String>,
    pub begin_x: u64,
    pub end_x: u64,
    pub begin_y: u64,
    pub end_y: u64,
}

/// An aligned block with both sequence names resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SyntenyBlock {
    pub name_x: String,
    pub name_y: String,
    pub begin_x: u64,
    pub end_x: u64,
    pub begin_y: u64,
    pub end_y: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SyntenyTable {
    pub rows: Vec<SyntenyRow>,
}

impl SyntenyRow {
    pub fn new(
        list_x: Option<&str>,
        list_y: Option<&str>,
        (begin_x, end_x): (u64, u64),
        (begin_y, end_y): (u64, u64),
    ) -> Self {
        Self {
            list_x: list_x.map(str::to_string),
            list_y: list_y.map(str::to_string),
            begin_x,
            end_x,
            begin_y,
            end_y,
        }
    }
}

impl SyntenyTable {
    pub fn new(rows: Vec<SyntenyRow>) -> Self {
        Self { rows }
    }

    /// Load a synteny table (.csv or .tsv)
    pub fn from_file(file_path: &Path) -> Result<Self, String> {
        println!("📊 Loading synteny table: {}", file_path.display());

        let table = loaders::read_table(file_path)?;
        let list_x_idx = table.column(LIST_X_COLUMN)?;
        let list_y_idx = table.column(LIST_Y_COLUMN)?;
        let begin_x_idx = table.column(BEGIN_X_COLUMN)?;
        let end_x_idx = table.column(END_X_COLUMN)?;
        let begin_y_idx = table.column(BEGIN_Y_COLUMN)?;
        let end_y_idx = table.column(END_Y_COLUMN)?;

        let mut rows = Vec::with_capacity(table.len());
        for (line_num, record) in table.records.iter().enumerate() {
            let coordinate = |idx: usize, column: &str| -> Result<u64, String> {
                parse_coordinate(record.get(idx).unwrap_or("")).map_err(|e| {
                    format!("Line {} column {}: {}", line_num + 2, column, e)
                })
            };
            rows.push(SyntenyRow {
                list_x: parse_name(record.get(list_x_idx).unwrap_or("")),
                list_y: parse_name(record.get(list_y_idx).unwrap_or("")),
                begin_x: coordinate(begin_x_idx, BEGIN_X_COLUMN)?,
                end_x: coordinate(end_x_idx, END_X_COLUMN)?,
                begin_y: coordinate(begin_y_idx, BEGIN_Y_COLUMN)?,
                end_y: coordinate(end_y_idx, END_Y_COLUMN)?,
            });
        }

        println!("✅ Synteny table loaded: {} blocks", rows.len());
        Ok(Self { rows })
    }

    /// Resolve the sequence names of every row.
    ///
    /// With `forward_fill`, a missing `list_x` takes the last non-missing
    /// `list_x` above it (producers write the name only on a block's first
    /// row). `list_y` is never filled.
    pub fn resolve_blocks(&self, forward_fill: bool) -> Result<Vec<SyntenyBlock>, String> {
        let mut current_x: Option<&str> = None;
        let mut blocks = Vec::with_capacity(self.rows.len());

        for (i, row) in self.rows.iter().enumerate() {
            let name_x = match (&row.list_x, forward_fill) {
                (Some(name), _) => {
                    current_x = Some(name.as_str());
                    name.as_str()
                }
                (None, true) => current_x.ok_or_else(|| {
                    format!(
                        "Row {} has no {} and no earlier row to carry it from",
                        i + 1,
                        LIST_X_COLUMN
                    )
                })?,
                (None, false) => {
                    return Err(format!("Row {} has no {}", i + 1, LIST_X_COLUMN));
                }
            };
            let name_y = row
                .list_y
                .as_deref()
                .ok_or_else(|| format!("Row {} has no {}", i + 1, LIST_Y_COLUMN))?;

            blocks.push(SyntenyBlock {
                name_x: name_x.to_string(),
                name_y: name_y.to_string(),
                begin_x: row.begin_x,
                end_x: row.end_x,
                begin_y: row.begin_y,
                end_y: row.end_y,
            });
        }

        Ok(blocks)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_fill_list_x() {
        let table = SyntenyTable::new(vec![
            SyntenyRow::new(Some("A"), Some("B"), (1, 2), (3, 4)),
            SyntenyRow::new(None, Some("B"), (5, 6), (7, 8)),
            SyntenyRow::new(Some("C"), Some("A"), (9, 10), (11, 12)),
            SyntenyRow::new(None, Some("C"), (13, 14), (15, 16)),
        ]);

        let blocks = table.resolve_blocks(true).unwrap();
        let names: Vec<(&str, &str)> = blocks
            .iter()
            .map(|b| (b.name_x.as_str(), b.name_y.as_str()))
            .collect();
        assert_eq!(names, vec![("A", "B"), ("A", "B"), ("C", "A"), ("C", "C")]);
        assert_eq!(blocks[1].begin_x, 5);
    }

    #[test]
    fn test_forward_fill_disabled() {
        let table = SyntenyTable::new(vec![
            SyntenyRow::new(Some("A"), Some("B"), (1, 2), (3, 4)),
            SyntenyRow::new(None, Some("B"), (5, 6), (7, 8)),
        ]);
        let err = table.resolve_blocks(false).unwrap_err();
        assert!(err.contains("Row 2"));
    }

    #[test]
    fn test_leading_missing_name_fails() {
        let table = SyntenyTable::new(vec![SyntenyRow::new(None, Some("B"), (1, 2), (3, 4))]);
        assert!(table.resolve_blocks(true).is_err());
    }

    #[test]
    fn test_missing_list_y_fails() {
        let table = SyntenyTable::new(vec![SyntenyRow::new(Some("A"), None, (1, 2), (3, 4))]);
        let err = table.resolve_blocks(true).unwrap_err();
        assert!(err.contains(LIST_Y_COLUMN));
    }

    #[test]
    fn test_from_file_sparse_names() {
        let path = std::env::temp_dir().join("wgdplot_synteny_test.tsv");
        std::fs::write(
            &path,
            "list_x\tlist_y\tbegin_x\tend_x\tbegin_y\tend_y\n\
             A\tB\t10\t20\t5\t15\n\
             \tB\t30.0\t40\t25\t35\n",
        )
        .unwrap();

        let table = SyntenyTable::from_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], SyntenyRow::new(Some("A"), Some("B"), (10, 20), (5, 15)));
        assert_eq!(table.rows[1].list_x, None);
        assert_eq!(table.rows[1].begin_x, 30);

        std::fs::remove_file(&path).ok();
    }
}
