// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Common (only override defaults, not explicit CLI values)
        if self.plot == "selection" {
            if let Some(plot) = config.plot {
                self.plot = plot;
            }
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Selection plot
        if self.dists.is_none() {
            self.dists = config.dists.map(|d| d.join(","));
        }
        if self.alphas.is_none() {
            self.alphas = config.alphas.map(|alphas| {
                alphas
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            });
        }
        if self.ks_min == 0.1 {
            if let Some(ks_min) = config.ks_min {
                self.ks_min = ks_min;
            }
        }
        if self.ks_max == 5.0 {
            if let Some(ks_max) = config.ks_max {
                self.ks_max = ks_max;
            }
        }
        if self.offset == 5.0 {
            if let Some(offset) = config.offset {
                self.offset = offset;
            }
        }
        if self.title == "Species genus" {
            if let Some(title) = config.title {
                self.title = title;
            }
        }
        if self.bins == 40 {
            if let Some(bins) = config.bins {
                self.bins = bins;
            }
        }
        if self.rwidth == 0.8 {
            if let Some(rwidth) = config.rwidth {
                self.rwidth = rwidth;
            }
        }
        if self.color == "black" {
            if let Some(color) = config.color {
                self.color = color;
            }
        }

        // Syntenic dotplot
        if self.synteny.is_none() {
            self.synteny = config.synteny;
        }
        if self.include_elements.is_none() {
            self.include_elements = config.include_elements;
        }
        if self.exclude_elements.is_none() {
            self.exclude_elements = config.exclude_elements;
        }
        if self.offsets_output.is_none() {
            self.offsets_output = config.offsets_output;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.no_forward_fill && config.no_forward_fill.unwrap_or(false) {
            self.no_forward_fill = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["wgdplot"], args).unwrap()
    }

    #[test]
    fn test_config_fills_defaults() {
        let args = parse(&[]);
        let config = Config {
            plot: Some("dotplot".to_string()),
            synteny: Some("segments.tsv".to_string()),
            dists: Some(vec!["a.tsv".to_string(), "b.tsv".to_string()]),
            alphas: Some(vec![0.25, 0.75]),
            ks_max: Some(3.0),
            no_forward_fill: Some(true),
            ..Config::new()
        };
        let merged = args.merge_with_config(config);
        assert_eq!(merged.plot, "dotplot");
        assert_eq!(merged.synteny.as_deref(), Some("segments.tsv"));
        assert_eq!(merged.dists.as_deref(), Some("a.tsv,b.tsv"));
        assert_eq!(merged.alphas.as_deref(), Some("0.25,0.75"));
        assert_eq!(merged.ks_max, 3.0);
        assert_eq!(merged.ks_min, 0.1);
        assert!(merged.no_forward_fill);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let args = parse(&["--ks-max", "2.5", "--title", "Vitis vinifera", "--output", "cli.png"]);
        let config = Config {
            ks_max: Some(3.0),
            title: Some("Config title".to_string()),
            output: Some("config.png".to_string()),
            ..Config::new()
        };
        let merged = args.merge_with_config(config);
        assert_eq!(merged.ks_max, 2.5);
        assert_eq!(merged.title, "Vitis vinifera");
        assert_eq!(merged.output.as_deref(), Some("cli.png"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(Args::split_list(" a.tsv, b.tsv ,,"), vec!["a.tsv", "b.tsv"]);
        assert!(Args::split_list("").is_empty());
    }
}
