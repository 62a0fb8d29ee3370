// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// wgdplot - Selection panels and syntenic dotplots for WGD analyses
pub struct Args {
    /// plot type: selection, dotplot (default: selection)
    #[argh(option, default = "String::from(\"selection\")")]
    pub plot: String,

    /// output image file (.png or .svg)
    #[argh(option)]
    pub output: Option<String>,

    /// comma-separated distribution tables with Ks, Ka, Omega, WeightOutliersIncluded columns
    #[argh(option)]
    pub dists: Option<String>,

    /// comma-separated opacities, one per distribution (default: ramp from 0.2 to 1.0)
    #[argh(option)]
    pub alphas: Option<String>,

    /// lower Ks bound, exclusive (default: 0.1)
    #[argh(option, default = "0.1")]
    pub ks_min: f64,

    /// upper Ks bound, exclusive (default: 5.0)
    #[argh(option, default = "5.0")]
    pub ks_max: f64,

    /// axis offset in points (default: 5)
    #[argh(option, default = "5.0")]
    pub offset: f64,

    /// selection panel title (default: Species genus)
    #[argh(option, default = "String::from(\"Species genus\")")]
    pub title: String,

    /// number of histogram bins (default: 40)
    #[argh(option, default = "40")]
    pub bins: usize,

    /// bar width relative to bin width, 0-1 (default: 0.8)
    #[argh(option, default = "0.8")]
    pub rwidth: f64,

    /// histogram colour name or #rrggbb (default: black)
    #[argh(option, default = "String::from(\"black\")")]
    pub color: String,

    /// synteny table with list_x, list_y, begin_x, end_x, begin_y, end_y columns
    #[argh(option)]
    pub synteny: Option<String>,

    /// do not carry list_x forward over rows that omit it
    #[argh(switch)]
    pub no_forward_fill: bool,

    /// include only genomic elements matching regex pattern
    #[argh(option)]
    pub include_elements: Option<String>,

    /// exclude genomic elements matching regex pattern
    #[argh(option)]
    pub exclude_elements: Option<String>,

    /// write genomic element offsets to file (.json or TSV)
    #[argh(option)]
    pub offsets_output: Option<String>,

    /// validate inputs without rendering (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

impl Args {
    /// Split a comma-separated option into trimmed, non-empty items
    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
