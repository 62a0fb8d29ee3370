// distribution.rs - Ks/Ka/Omega distribution tables

use crate::data::loaders::{self, parse_float};
use std::path::Path;

pub const KS_COLUMN: &str = "Ks";
pub const KA_COLUMN: &str = "Ka";
pub const OMEGA_COLUMN: &str = "Omega";
pub const WEIGHT_COLUMN: &str = "WeightOutliersIncluded";

/// One gene-pair comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionRow {
    pub ks: f64,
    pub ka: f64,
    pub omega: f64,
    pub weight: f64,
}

impl DistributionRow {
    pub fn new(ks: f64, ka: f64, omega: f64, weight: f64) -> Self {
        Self {
            ks,
            ka,
            omega,
            weight,
        }
    }
}

/// A named distribution of paired rate measurements
#[derive(Debug, Clone)]
pub struct Distribution {
    pub name: String,
    pub rows: Vec<DistributionRow>,
}

impl Distribution {
    pub fn new(name: impl Into<String>, rows: Vec<DistributionRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Load a distribution table (.csv or .tsv); the file stem becomes its name
    pub fn from_file(file_path: &Path) -> Result<Self, String> {
        println!("📊 Loading distribution: {}", file_path.display());

        let table = loaders::read_table(file_path)?;
        let ks_idx = table.column(KS_COLUMN)?;
        let ka_idx = table.column(KA_COLUMN)?;
        let omega_idx = table.column(OMEGA_COLUMN)?;
        let weight_idx = table.column(WEIGHT_COLUMN)?;

        let mut rows = Vec::with_capacity(table.len());
        for (line_num, record) in table.records.iter().enumerate() {
            let cell = |idx: usize, column: &str| -> Result<f64, String> {
                parse_float(record.get(idx).unwrap_or("")).map_err(|e| {
                    format!("Line {} column {}: {}", line_num + 2, column, e)
                })
            };
            rows.push(DistributionRow {
                ks: cell(ks_idx, KS_COLUMN)?,
                ka: cell(ka_idx, KA_COLUMN)?,
                omega: cell(omega_idx, OMEGA_COLUMN)?,
                weight: cell(weight_idx, WEIGHT_COLUMN)?,
            });
        }

        let name = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("distribution")
            .to_string();

        println!("✅ Distribution loaded: {} ({} rows)", name, rows.len());
        Ok(Self { name, rows })
    }

    /// Keep rows with lo < Ks < hi
    pub fn filter_ks(&self, lo: f64, hi: f64) -> Self {
        Self {
            name: self.name.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r.ks > lo && r.ks < hi)
                .copied()
                .collect(),
        }
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
    fn test_filter_ks_is_strict() {
        let dist = Distribution::new(
            "test",
            vec![
                DistributionRow::new(0.1, 0.01, 0.1, 1.0),
                DistributionRow::new(0.5, 0.05, 0.1, 1.0),
                DistributionRow::new(5.0, 0.5, 0.1, 1.0),
                DistributionRow::new(f64::NAN, 0.5, 0.1, 1.0),
            ],
        );
        let filtered = dist.filter_ks(0.1, 5.0);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0].ks, 0.5);
        assert_eq!(filtered.name, "test");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("wgdplot_dist_test.csv");
        std::fs::write(
            &path,
            ",Ks,Ka,Omega,WeightOutliersIncluded\n\
             p1,0.5,0.05,0.1,1.0\n\
             p2,1.2,,0.2,0.5\n",
        )
        .unwrap();

        let dist = Distribution::from_file(&path).unwrap();
        assert_eq!(dist.name, "wgdplot_dist_test");
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.rows[0], DistributionRow::new(0.5, 0.05, 0.1, 1.0));
        assert!(dist.rows[1].ka.is_nan());
        assert_eq!(dist.rows[1].weight, 0.5);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing_column() {
        let path = std::env::temp_dir().join("wgdplot_dist_missing.tsv");
        std::fs::write(&path, "Ks\tKa\tOmega\n0.5\t0.05\t0.1\n").unwrap();

        let err = Distribution::from_file(&path).unwrap_err();
        assert!(err.contains(WEIGHT_COLUMN));

        std::fs::remove_file(&path).ok();
    }
}
