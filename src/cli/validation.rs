// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::KsRange;
use crate::render::{parse_color, DotplotOptions, HistogramStyle, SelectionOptions};
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;

/// Which figure to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Selection,
    Dotplot,
}

impl FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selection" => Ok(PlotKind::Selection),
            "dotplot" | "synteny" => Ok(PlotKind::Dotplot),
            _ => Err(format!("Unknown plot type: {}. Use: selection, dotplot", s)),
        }
    }
}

pub enum ValidationResult {
    Selection {
        dists: Vec<PathBuf>,
        options: SelectionOptions,
    },
    Dotplot {
        synteny: PathBuf,
        options: DotplotOptions,
    },
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let plot_kind = PlotKind::from_str(&args.plot)?;

    if args.output.is_none() && !args.dry_run {
        return Err("--output is required (unless --dry-run)".to_string());
    }
    if !args.offset.is_finite() || args.offset < 0.0 {
        return Err("Axis offset must be a non-negative number".to_string());
    }

    match plot_kind {
        PlotKind::Selection => validate_selection(args),
        PlotKind::Dotplot => validate_dotplot(args),
    }
}

fn validate_selection(args: &Args) -> Result<ValidationResult, String> {
    let dists: Vec<PathBuf> = args
        .dists
        .as_deref()
        .map(Args::split_list)
        .unwrap_or_default()
        .into_iter()
        .map(PathBuf::from)
        .collect();
    if dists.is_empty() {
        return Err("--dists is required for the selection plot".to_string());
    }
    if args.synteny.is_some() {
        println!("⚠️  --synteny is ignored for the selection plot");
    }

    // Validate Ks range
    if !(args.ks_min < args.ks_max) {
        return Err(format!(
            "Ks range is empty: --ks-min {} must be below --ks-max {}",
            args.ks_min, args.ks_max
        ));
    }

    // Validate alphas
    let alphas = match &args.alphas {
        Some(list) => {
            let mut alphas = Vec::new();
            for item in Args::split_list(list) {
                let alpha = item
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid alpha value '{}'", item))?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(format!("Alpha {} must be between 0.0 and 1.0", alpha));
                }
                alphas.push(alpha);
            }
            if alphas.len() < dists.len() {
                println!(
                    "⚠️  {} alpha value(s) for {} distributions: using automatic opacities",
                    alphas.len(),
                    dists.len()
                );
            }
            Some(alphas)
        }
        None => None,
    };

    // Validate histogram options
    if args.bins == 0 {
        return Err("Number of bins must be at least 1".to_string());
    }
    if !(args.rwidth > 0.0 && args.rwidth <= 1.0) {
        return Err("Relative bar width must be in (0.0, 1.0]".to_string());
    }
    let color = parse_color(&args.color)?;

    Ok(ValidationResult::Selection {
        dists,
        options: SelectionOptions {
            alphas,
            ks_range: KsRange::new(args.ks_min, args.ks_max),
            offset: args.offset,
            title: args.title.clone(),
            style: HistogramStyle {
                bins: args.bins,
                rwidth: args.rwidth,
                color,
            },
        },
    })
}

fn validate_dotplot(args: &Args) -> Result<ValidationResult, String> {
    let synteny = args
        .synteny
        .as_ref()
        .ok_or("--synteny is required for the dotplot")?;
    if args.dists.is_some() {
        println!("⚠️  --dists is ignored for the dotplot");
    }

    // Compile regex patterns
    let include_elements = if let Some(pattern) = &args.include_elements {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_elements regex: {}", e))?)
    } else {
        None
    };

    let exclude_elements = if let Some(pattern) = &args.exclude_elements {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_elements regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult::Dotplot {
        synteny: PathBuf::from(synteny),
        options: DotplotOptions {
            forward_fill: !args.no_forward_fill,
            include_elements,
            exclude_elements,
            offset: args.offset,
        },
    })
}
