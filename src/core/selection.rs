// selection.rs - Selection panel model: Ks filtering, alpha ramp and shared bins

use crate::core::histogram::{bin_edges, weighted_counts};
use crate::data::{Distribution, DistributionRow};
use std::fmt;

pub const DEFAULT_KS_RANGE: (f64, f64) = (0.1, 5.0);
pub const DEFAULT_BINS: usize = 40;
const ALPHA_MIN: f64 = 0.2;
const ALPHA_MAX: f64 = 1.0;

/// Measurement shown in one panel of the selection plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateAxis {
    Ks,
    Ka,
    LnKa,
    LnOmega,
}

impl RateAxis {
    /// Panel order: Ks, Ka, ln(Ka), ln(Omega)
    pub const PANELS: [RateAxis; 4] = [RateAxis::Ks, RateAxis::Ka, RateAxis::LnKa, RateAxis::LnOmega];

    pub fn value(&self, row: &DistributionRow) -> f64 {
        match self {
            RateAxis::Ks => row.ks,
            RateAxis::Ka => row.ka,
            RateAxis::LnKa => row.ka.ln(),
            RateAxis::LnOmega => row.omega.ln(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateAxis::Ks => "Ks",
            RateAxis::Ka => "Ka",
            RateAxis::LnKa => "ln(Ka)",
            RateAxis::LnOmega => "ln(ω)",
        }
    }
}

impl fmt::Display for RateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusion range on Ks, exclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsRange {
    pub lo: f64,
    pub hi: f64,
}

impl Default for KsRange {
    fn default() -> Self {
        Self {
            lo: DEFAULT_KS_RANGE.0,
            hi: DEFAULT_KS_RANGE.1,
        }
    }
}

impl KsRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, ks: f64) -> bool {
        ks > self.lo && ks < self.hi
    }
}

/// `n` evenly spaced opacities from 0.2 to 1.0 inclusive
pub fn auto_alphas(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![ALPHA_MIN],
        _ => {
            let step = (ALPHA_MAX - ALPHA_MIN) / (n - 1) as f64;
            let mut alphas: Vec<f64> = (0..n - 1).map(|i| ALPHA_MIN + step * i as f64).collect();
            alphas.push(ALPHA_MAX);
            alphas
        }
    }
}

/// Use the given alphas when there is one per distribution, otherwise the auto ramp
pub fn resolve_alphas(given: Option<&[f64]>, n: usize) -> Vec<f64> {
    match given {
        Some(alphas) if alphas.len() >= n => alphas[..n].to_vec(),
        _ => auto_alphas(n),
    }
}

/// One distribution's weighted histogram on a panel's shared edges
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub name: String,
    pub alpha: f64,
    pub counts: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPanel {
    pub axis: RateAxis,
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

impl SelectionPanel {
    /// Bin a panel from already-filtered distributions
    pub fn build(
        axis: RateAxis,
        dists: &[Distribution],
        alphas: &[f64],
        bins: usize,
    ) -> Result<Self, String> {
        let pooled: Vec<f64> = dists
            .iter()
            .flat_map(|d| d.rows.iter().map(move |r| axis.value(r)))
            .collect();
        let edges = bin_edges(&pooled, bins).map_err(|e| format!("{} panel: {}", axis, e))?;

        let series = dists
            .iter()
            .zip(alphas)
            .map(|(dist, &alpha)| {
                let values: Vec<f64> = dist.rows.iter().map(|r| axis.value(r)).collect();
                let weights: Vec<f64> = dist.rows.iter().map(|r| r.weight).collect();
                HistogramSeries {
                    name: dist.name.clone(),
                    alpha,
                    counts: weighted_counts(&values, &weights, &edges),
                }
            })
            .collect();

        Ok(Self {
            axis,
            edges,
            series,
        })
    }

    /// Tallest bar over all series
    pub fn max_count(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Filter every distribution by Ks and bin the four panels
pub fn build_panels(
    dists: &[Distribution],
    alphas: Option<&[f64]>,
    ks_range: KsRange,
    bins: usize,
) -> Result<Vec<SelectionPanel>, String> {
    if dists.is_empty() {
        return Err("At least one distribution is required".to_string());
    }

    let filtered: Vec<Distribution> = dists
        .iter()
        .map(|d| d.filter_ks(ks_range.lo, ks_range.hi))
        .collect();
    let alphas = resolve_alphas(alphas, filtered.len());

    RateAxis::PANELS
        .iter()
        .map(|&axis| SelectionPanel::build(axis, &filtered, &alphas, bins))
        .collect()
}
