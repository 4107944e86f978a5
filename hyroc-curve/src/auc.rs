//! Area under a rate curve.

use hyroc_core::{HyrocError, Result};

/// Integrate `tpr` over `fpr` with the trapezoidal rule.
///
/// Both sequences must have equal length (at least two points), hold finite
/// rates in `[0, 1]`, and be non-decreasing. A diagonal curve scores 0.5 and
/// a perfectly separating one scores 1.0.
pub fn compute_auc(fpr: &[f64], tpr: &[f64]) -> Result<f64> {
    if fpr.len() != tpr.len() {
        return Err(HyrocError::rates(format!(
            "fpr length {} != tpr length {}",
            fpr.len(),
            tpr.len()
        )));
    }
    if fpr.len() < 2 {
        return Err(HyrocError::rates(format!(
            "need at least 2 points, got {}",
            fpr.len()
        )));
    }
    check_rates("fpr", fpr)?;
    check_rates("tpr", tpr)?;

    Ok(trapezoidal_auc(fpr, tpr))
}

fn check_rates(name: &str, rates: &[f64]) -> Result<()> {
    for (i, &r) in rates.iter().enumerate() {
        if !(0.0..=1.0).contains(&r) {
            return Err(HyrocError::rates(format!(
                "{} at index {} is outside [0, 1]: {}",
                name, i, r,
            )));
        }
        if i > 0 && r < rates[i - 1] {
            return Err(HyrocError::rates(format!(
                "{} decreases at index {}: {} -> {}",
                name,
                i,
                rates[i - 1],
                r,
            )));
        }
    }
    Ok(())
}

/// Trapezoidal AUC: sum of trapezoids between consecutive (x, y) points.
fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    let mut auc = 0.0;
    for i in 1..x.len() {
        auc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
    }
    auc
}
