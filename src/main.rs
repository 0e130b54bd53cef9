use itertools::Itertools;
use std::env;
use std::fs;
use std::sync::Arc;
use tablefit::traits::{AverageCharWidthMeasurer, TextMeasurer};
use tablefit::{Fit, OptimizerConfig, OptimizerError, TableDocument, TableOptimizer};

/// Uses real font metrics when the configured family is installed, an estimate otherwise.
fn select_measurer(config: &OptimizerConfig) -> Result<Arc<dyn TextMeasurer>, OptimizerError> {
    let font = config.font()?;

    #[cfg(feature = "native")]
    {
        let fonts = tablefit::layout::FontMeasurer::new().with_system_fonts();
        match fonts.measure_width("a", &font.family, font.style, font.size) {
            Ok(_) => return Ok(Arc::new(fonts)),
            Err(e) => log::warn!("{}; estimating widths from character counts instead", e),
        }
    }

    log::info!("Measuring '{}' text with average character widths", font.family);
    Ok(Arc::new(AverageCharWidthMeasurer::default()))
}

/// A simple CLI to size a table document's columns and print the table.
fn main() -> Result<(), OptimizerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Sizes the columns of an HTML table for a printed page.");
        eprintln!();
        eprintln!("Usage: {} <path/to/table.json> [path/to/output.html]", args[0]);
        eprintln!();
        eprintln!("Without an output path the styled table is written to stdout.");
        std::process::exit(1);
    }

    let document = TableDocument::from_path(&args[1])?;
    let measurer = select_measurer(&document.config)?;
    let optimizer = TableOptimizer::from_document(&document, measurer)?;
    let output = optimizer.render(&document.strategy)?;

    match args.get(2) {
        Some(path) => {
            fs::write(path, output.to_document())?;
            eprintln!("Wrote {}", path);
        }
        None => print!("{}", output.to_document()),
    }

    let widths = output
        .widths
        .percentages()
        .map(|p| format!("{:.2}%", p))
        .join(", ");
    match output.widths.fit() {
        Fit::Exact => eprintln!("Column widths: {}", widths),
        Fit::Overflow { demand } => eprintln!(
            "Column widths: {} (content needs {:.2}% of the table and will overflow)",
            widths,
            demand * 100.0
        ),
        Fit::Underfill { total } => eprintln!(
            "Column widths: {} (only {:.2}% of the table is used)",
            widths,
            total * 100.0
        ),
    }
    Ok(())
}
