//! pixdiff command-line tool
//!
//! Compares two images and writes a diff image plus an HTML report:
//!
//! ```text
//! pixdiff baseline.png candidate.png diff.png --tolerance 2.3
//! ```
//!
//! The exit code is non-zero for operational failures (unreadable input,
//! mismatched dimensions); a successful comparison with mismatching
//! pixels still exits 0 and reports the numbers.

mod report;

use anyhow::Context;
use clap::Parser;
use pixdiff::compare_grids;
use pixdiff::io::{read_image, write_image};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixdiff")]
#[command(
    version,
    about = "Compare two images and highlight the changed pixels in an output file"
)]
struct Cli {
    /// Baseline image (PNG)
    #[arg(value_name = "BASELINE")]
    baseline: PathBuf,

    /// Candidate image to compare against the baseline (PNG)
    #[arg(value_name = "CANDIDATE")]
    candidate: PathBuf,

    /// Path for the diff image; the HTML report lands next to it
    /// with `.html` appended
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Delta E tolerance under which a pixel pair still counts as a match
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    tolerance: f32,

    /// Skip writing the HTML report
    #[arg(long)]
    no_report: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let baseline = read_image(&cli.baseline)
        .with_context(|| format!("failed to read baseline {}", cli.baseline.display()))?;
    let candidate = read_image(&cli.candidate)
        .with_context(|| format!("failed to read candidate {}", cli.candidate.display()))?;

    let report = compare_grids(&baseline, &candidate, cli.tolerance)
        .context("unable to compare the input images")?;

    write_image(&report.diff, &cli.output)
        .with_context(|| format!("failed to write diff image {}", cli.output.display()))?;

    if !cli.no_report {
        let html = report::render_html(
            &cli.baseline,
            &cli.candidate,
            &cli.output,
            cli.tolerance,
            &report,
        );
        let mut html_path = OsString::from(cli.output.as_os_str());
        html_path.push(".html");
        let html_path = PathBuf::from(html_path);
        std::fs::write(&html_path, html)
            .with_context(|| format!("failed to write report {}", html_path.display()))?;
    }

    println!(
        "{} of {} pixels differ ({:.2}%), delta E min {:.4} / max {:.4} / avg {:.4}",
        report.n_diff,
        report.diff.pixel_count(),
        report.fract_diff * 100.0,
        report.min_delta,
        report.max_delta,
        report.avg_delta,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_positional_order() {
        let cli = Cli::try_parse_from(["pixdiff", "a.png", "b.png", "out.png"]).unwrap();
        assert_eq!(cli.baseline, PathBuf::from("a.png"));
        assert_eq!(cli.candidate, PathBuf::from("b.png"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.tolerance, 0.0);
        assert!(!cli.no_report);
    }

    #[test]
    fn test_tolerance_option() {
        let cli =
            Cli::try_parse_from(["pixdiff", "a.png", "b.png", "out.png", "--tolerance", "2.5"])
                .unwrap();
        assert_eq!(cli.tolerance, 2.5);
    }

    #[test]
    fn test_missing_args_rejected() {
        assert!(Cli::try_parse_from(["pixdiff", "a.png", "b.png"]).is_err());
    }
}
