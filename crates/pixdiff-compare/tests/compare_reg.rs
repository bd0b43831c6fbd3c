//! Regression tests for the grid comparison engine
//!
//! Checks the whole-grid contracts: every output pixel is either the red
//! highlight or the dimmed baseline color, statistics bracket correctly,
//! and the match set only grows with tolerance.

use pixdiff_compare::{MISMATCH_COLOR, compare_grids, dim_color};
use pixdiff_core::{Grid, color};
use pixdiff_test::{make_gradient_grid, make_noise_grid, make_uniform_grid};

/// Copy `src` with a rectangular block overwritten by one color
fn with_block(src: &Grid, x0: u32, y0: u32, w: u32, h: u32, r: u8, g: u8, b: u8) -> Grid {
    let mut gm = src.to_mut();
    for y in y0..(y0 + h).min(src.height()) {
        for x in x0..(x0 + w).min(src.width()) {
            gm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
        }
    }
    gm.into()
}

#[test]
fn output_pixels_are_only_red_or_dimmed_baseline() {
    let baseline = make_gradient_grid(24, 16);
    let candidate = with_block(&baseline, 4, 4, 8, 6, 0, 0, 255);

    let report = compare_grids(&baseline, &candidate, 0.0).unwrap();
    for y in 0..baseline.height() {
        for x in 0..baseline.width() {
            let out = report.diff.get_pixel_unchecked(x, y);
            let base = baseline.get_pixel_unchecked(x, y);
            let cand = candidate.get_pixel_unchecked(x, y);
            assert!(
                out == MISMATCH_COLOR || out == dim_color(base),
                "unexpected output color at ({x},{y}): {out:#010x}"
            );
            // Never the untouched original and never the candidate's color
            if out != MISMATCH_COLOR {
                assert_ne!(out, cand, "candidate color leaked at ({x},{y})");
            }
        }
    }
}

#[test]
fn changed_block_is_highlighted_exactly() {
    let baseline = make_uniform_grid(40, 120, 200, 20, 20);
    let candidate = with_block(&baseline, 5, 5, 4, 4, 200, 120, 40);

    let report = compare_grids(&baseline, &candidate, 0.0).unwrap();
    assert_eq!(report.n_diff, 16);

    let red_count = report
        .diff
        .data()
        .iter()
        .filter(|&&p| p == MISMATCH_COLOR)
        .count();
    assert_eq!(red_count, 16);
    assert!(report.diff.get_pixel(5, 5) == Some(MISMATCH_COLOR));
    assert!(report.diff.get_pixel(4, 5) != Some(MISMATCH_COLOR));
}

#[test]
fn self_comparison_has_no_red_pixels() {
    let grid = make_noise_grid(32, 32, 7);
    let report = compare_grids(&grid, &grid, 0.0).unwrap();

    assert_eq!(report.n_diff, 0);
    assert_eq!(report.min_delta, 0.0);
    assert_eq!(report.max_delta, 0.0);
    assert_eq!(report.avg_delta, 0.0);
    assert!(report.diff.data().iter().all(|&p| p != MISMATCH_COLOR));
}

#[test]
fn statistics_bracket_average() {
    let a = make_noise_grid(16, 16, 1);
    let b = make_noise_grid(16, 16, 2);
    let report = compare_grids(&a, &b, 0.0).unwrap();

    assert!(report.min_delta <= report.avg_delta);
    assert!(report.avg_delta <= report.max_delta);
    assert!(report.max_delta > 0.0);
}

#[test]
fn mismatch_count_shrinks_as_tolerance_grows() {
    let a = make_noise_grid(16, 16, 10);
    let b = make_noise_grid(16, 16, 11);

    let mut previous = u64::MAX;
    for tolerance in [0.0, 5.0, 20.0, 80.0, 1000.0] {
        let report = compare_grids(&a, &b, tolerance).unwrap();
        assert!(
            report.n_diff <= previous,
            "n_diff grew from {previous} to {} at tolerance {tolerance}",
            report.n_diff
        );
        previous = report.n_diff;
    }
    // A tolerance beyond any possible Delta E matches everything
    assert_eq!(previous, 0);
}

#[test]
fn dimension_mismatch_is_refused_up_front() {
    let a = make_uniform_grid(0, 0, 0, 2, 2);
    let b = make_uniform_grid(0, 0, 0, 3, 2);
    assert!(compare_grids(&a, &b, 0.0).is_err());
    assert!(compare_grids(&b, &a, 0.0).is_err());
}
