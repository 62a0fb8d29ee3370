// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;
use wgdplot::cli::Config;
use wgdplot::core::filter_blocks;
use wgdplot::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 {}", wgdplot::get_info());

    let validation_result = validate_args(&args)?;
    let output = args.output.as_deref().map(Path::new);
    let total_start = Instant::now();

    match validation_result {
        ValidationResult::Selection { dists, options } => {
            let distributions = dists
                .iter()
                .map(|path| Distribution::from_file(path))
                .collect::<Result<Vec<_>, String>>()?;

            if args.dry_run {
                for dist in &distributions {
                    let kept = dist.filter_ks(options.ks_range.lo, options.ks_range.hi).len();
                    println!(
                        "📋 {}: {} rows, {} inside Ks range",
                        dist.name,
                        dist.len(),
                        kept
                    );
                }
                println!("✅ Dry run completed successfully");
                return Ok(());
            }

            let figure = plot_selection(&distributions, output, &options)?;
            for panel in &figure.panels {
                println!(
                    "  • {}: {} bins over [{:.3}, {:.3}]",
                    panel.axis,
                    panel.edges.len().saturating_sub(1),
                    panel.edges.first().copied().unwrap_or(0.0),
                    panel.edges.last().copied().unwrap_or(0.0)
                );
            }
        }
        ValidationResult::Dotplot { synteny, options } => {
            let table = SyntenyTable::from_file(&synteny)?;

            if args.dry_run {
                let blocks = filter_blocks(
                    table.resolve_blocks(options.forward_fill)?,
                    options.include_elements.as_ref(),
                    options.exclude_elements.as_ref(),
                );
                let offsets = GenomicOffsets::from_blocks(&blocks);
                println!(
                    "📋 {} blocks over {} genomic elements (total length {})",
                    blocks.len(),
                    offsets.len(),
                    offsets.total
                );
                println!("✅ Dry run completed successfully");
                return Ok(());
            }

            let figure = syntenic_dotplot(&table, output, &options)?;
            if let Some(offsets_path) = &args.offsets_output {
                write_offsets(offsets_path, &figure.offsets, &command_line)?;
            }
        }
    }

    println!("⏱️  Completed in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
