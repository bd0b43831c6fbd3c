//! HTML comparison report
//!
//! Renders a single self-contained page with the baseline, diff and
//! candidate images side by side (three equal panes) and a table of the
//! comparison statistics. The page references the image files by path;
//! it is meant to be opened next to them, not shipped around.

use pixdiff::DiffReport;
use std::path::Path;

/// Render the report page as an HTML string.
pub fn render_html(
    baseline: &Path,
    candidate: &Path,
    diff: &Path,
    tolerance: f32,
    report: &DiffReport,
) -> String {
    let pane = |path: &Path| {
        format!(
            "<div style='width: 33.33%; display: inline-block;'>\
             <img src='{}' style='width: 100%; height: auto'></div>",
            path.display()
        )
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>pixdiff report</title></head>\n<body>\n\
         {}{}{}\n\
         <table border='1' cellpadding='4'>\n\
         <tr><th>pixels compared</th><td>{}</td></tr>\n\
         <tr><th>mismatched pixels</th><td>{} ({:.2}%)</td></tr>\n\
         <tr><th>tolerance (&Delta;E)</th><td>{}</td></tr>\n\
         <tr><th>min &Delta;E</th><td>{:.4}</td></tr>\n\
         <tr><th>max &Delta;E</th><td>{:.4}</td></tr>\n\
         <tr><th>avg &Delta;E</th><td>{:.4}</td></tr>\n\
         </table>\n</body>\n</html>\n",
        pane(baseline),
        pane(diff),
        pane(candidate),
        report.diff.pixel_count(),
        report.n_diff,
        report.fract_diff * 100.0,
        tolerance,
        report.min_delta,
        report.max_delta,
        report.avg_delta,
    )
}
