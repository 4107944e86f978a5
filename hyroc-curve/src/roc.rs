//! Receiver Operating Characteristic curves.

use std::fmt::Debug;

use hyroc_core::{HyrocError, Result, Scored, Summarizable};

use crate::auc::compute_auc;
use crate::labels::BinaryTruth;

/// A single point on the ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPoint {
    /// Score threshold at which this point is computed.
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN).
    pub fpr: f64,
    /// True positive rate (recall): TP / (TP + FN).
    pub tpr: f64,
}

/// Options for ROC computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocConfig {
    /// Drop interior points that lie on a straight run of the curve.
    pub drop_intermediate: bool,
}

/// ROC curve with AUC.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// Points on the curve, from (0, 0) at threshold +inf to (1, 1).
    pub points: Vec<RocPoint>,
    /// Area under the ROC curve (trapezoidal rule).
    pub auc: f64,
    /// Number of positive samples.
    pub n_positive: usize,
    /// Number of negative samples.
    pub n_negative: usize,
}

impl RocCurve {
    /// False positive rates, non-decreasing.
    pub fn fpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fpr).collect()
    }

    /// True positive rates, non-decreasing.
    pub fn tpr(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tpr).collect()
    }

    /// Thresholds, strictly decreasing and starting at `+inf`.
    pub fn thresholds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.threshold).collect()
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points. Never true for a computed curve.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Split into `(fpr, tpr, thresholds)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut fpr = Vec::with_capacity(self.points.len());
        let mut tpr = Vec::with_capacity(self.points.len());
        let mut thresholds = Vec::with_capacity(self.points.len());
        for p in self.points {
            fpr.push(p.fpr);
            tpr.push(p.tpr);
            thresholds.push(p.threshold);
        }
        (fpr, tpr, thresholds)
    }
}

impl Scored for RocCurve {
    fn score(&self) -> f64 {
        self.auc
    }
}

impl Summarizable for RocCurve {
    fn summary(&self) -> String {
        format!(
            "ROC: {} points, {} positives, {} negatives, AUC={:.4}",
            self.points.len(),
            self.n_positive,
            self.n_negative,
            self.auc,
        )
    }
}

/// Compute the ROC curve as `(fpr, tpr, thresholds)` sequences.
///
/// `positive_label` selects which label value counts as positive; for the
/// hypothesis-testing labelling pass [`HYPOTHESIS_POSITIVE`](crate::HYPOTHESIS_POSITIVE).
///
/// # Errors
///
/// Returns an error if the inputs are empty, have different lengths, contain
/// a non-finite score, carry more than two distinct labels, or lack either
/// class.
pub fn compute_roc<L>(
    scores: &[f64],
    labels: &[L],
    positive_label: L,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)>
where
    L: Copy + PartialEq + Debug,
{
    Ok(roc_curve(scores, labels, positive_label)?.into_parts())
}

/// Compute the ROC curve, with its AUC, from scores and labels.
///
/// Sorts by descending score and walks thresholds to compute (FPR, TPR)
/// at each distinct score. Includes endpoints (0,0) and (1,1).
pub fn roc_curve<L>(scores: &[f64], labels: &[L], positive_label: L) -> Result<RocCurve>
where
    L: Copy + PartialEq + Debug,
{
    check_lengths(scores.len(), labels.len())?;
    let truth = BinaryTruth::from_labels(labels, positive_label)?;
    roc_curve_with(scores, &truth, &RocConfig::default())
}

/// Compute only the AUC of the ROC curve.
///
/// Shorthand for `roc_curve(scores, labels, positive_label)?.auc`.
pub fn roc_auc<L>(scores: &[f64], labels: &[L], positive_label: L) -> Result<f64>
where
    L: Copy + PartialEq + Debug,
{
    Ok(roc_curve(scores, labels, positive_label)?.auc)
}

/// Compute the ROC curve against already-validated ground truth.
pub fn roc_curve_with(
    scores: &[f64],
    truth: &BinaryTruth,
    config: &RocConfig,
) -> Result<RocCurve> {
    check_lengths(scores.len(), truth.len())?;
    check_scores(scores)?;

    let (thresholds, tps, fps) = counts_at_thresholds(scores, truth);
    let n_counts = thresholds.len();
    let (thresholds, tps, fps) = if config.drop_intermediate {
        drop_intermediate(thresholds, tps, fps)
    } else {
        (thresholds, tps, fps)
    };
    tracing::trace!(
        distinct = n_counts,
        kept = thresholds.len(),
        "ROC thresholds swept"
    );

    let p = truth.n_positive() as f64;
    let n = truth.n_negative() as f64;

    let mut points = Vec::with_capacity(thresholds.len() + 1);
    // Start at origin (threshold = +inf, nothing predicted positive)
    points.push(RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    });
    for ((&threshold, &tp), &fp) in thresholds.iter().zip(&tps).zip(&fps) {
        points.push(RocPoint {
            threshold,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    let auc = compute_auc(
        &points.iter().map(|p| p.fpr).collect::<Vec<_>>(),
        &points.iter().map(|p| p.tpr).collect::<Vec<_>>(),
    )?;

    Ok(RocCurve {
        points,
        auc,
        n_positive: truth.n_positive(),
        n_negative: truth.n_negative(),
    })
}

fn check_lengths(n_scores: usize, n_labels: usize) -> Result<()> {
    if n_scores == 0 {
        return Err(HyrocError::scores("empty input"));
    }
    if n_scores != n_labels {
        return Err(HyrocError::labels(format!(
            "labels length {} != scores length {}",
            n_labels, n_scores,
        )));
    }
    Ok(())
}

fn check_scores(scores: &[f64]) -> Result<()> {
    if let Some((i, s)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(HyrocError::scores(format!(
            "score at index {} is not finite: {}",
            i, s,
        )));
    }
    Ok(())
}

/// Cumulative (threshold, TP, FP) counts, one entry per distinct score in
/// descending order. The last entry covers every sample.
fn counts_at_thresholds(
    scores: &[f64],
    truth: &BinaryTruth,
) -> (Vec<f64>, Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut thresholds = Vec::new();
    let mut tps = Vec::new();
    let mut fps = Vec::new();

    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < indices.len() {
        // Accumulate all samples with the same score
        let current_score = scores[indices[i]];
        while i < indices.len() && scores[indices[i]] == current_score {
            if truth.is_positive(indices[i]) {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        thresholds.push(current_score);
        tps.push(tp);
        fps.push(fp);
    }

    (thresholds, tps, fps)
}

/// Keep the endpoints and every interior point where the second difference
/// of FP or TP is non-zero.
fn drop_intermediate(
    thresholds: Vec<f64>,
    tps: Vec<usize>,
    fps: Vec<usize>,
) -> (Vec<f64>, Vec<usize>, Vec<usize>) {
    let m = thresholds.len();
    if m <= 2 {
        return (thresholds, tps, fps);
    }

    let second_diff =
        |v: &[usize], j: usize| v[j + 1] as i64 - 2 * v[j] as i64 + v[j - 1] as i64;
    let bends = |j: usize| second_diff(&fps, j) != 0 || second_diff(&tps, j) != 0;

    let keep: Vec<usize> = (0..m)
        .filter(|&j| j == 0 || j == m - 1 || bends(j))
        .collect();

    (
        keep.iter().map(|&j| thresholds[j]).collect(),
        keep.iter().map(|&j| tps[j]).collect(),
        keep.iter().map(|&j| fps[j]).collect(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::HYPOTHESIS_POSITIVE;
    use hyroc_core::InputKind;

    const DEMO_LABELS: [u8; 10] = [1, 1, 1, 0, 1, 1, 0, 0, 1, 0];
    const MODEL_1: [f64; 10] = [0.1, 0.4, 0.35, 0.8, 0.2, 0.05, 0.9, 0.6, 0.3, 0.7];
    const MODEL_2: [f64; 10] = [0.05, 0.3, 0.25, 0.9, 0.15, 0.65, 0.35, 0.5, 0.45, 0.85];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn roc_perfect_auc() {
        // Perfect separation: all positives have higher scores than negatives
        let scores = vec![0.9, 0.8, 0.3, 0.1];
        let labels = vec![true, true, false, false];
        let roc = roc_curve(&scores, &labels, true).unwrap();
        assert!(close(roc.auc, 1.0));
    }

    #[test]
    fn roc_inverse_auc() {
        // Anti-perfect: all positives scored lower → AUC = 0
        let scores = vec![0.1, 0.2, 0.8, 0.9];
        let labels = vec![true, true, false, false];
        let roc = roc_curve(&scores, &labels, true).unwrap();
        assert!(close(roc.auc, 0.0));
    }

    #[test]
    fn roc_known_curve_points() {
        // After sorting: (0.9,T), (0.7,F), (0.5,T), (0.3,F)
        let scores = vec![0.9, 0.7, 0.5, 0.3];
        let labels = vec![true, false, true, false];
        let (fpr, tpr, thresholds) = compute_roc(&scores, &labels, true).unwrap();
        assert_eq!(fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
        assert_eq!(tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
        assert_eq!(thresholds[0], f64::INFINITY);
        assert_eq!(&thresholds[1..], &[0.9, 0.7, 0.5, 0.3]);
        assert!(close(roc_auc(&scores, &labels, true).unwrap(), 0.75));
    }

    #[test]
    fn roc_endpoints() {
        let scores = vec![0.9, 0.1];
        let labels = vec![true, false];
        let roc = roc_curve(&scores, &labels, true).unwrap();
        // First point should be (0, 0)
        assert_eq!((roc.points[0].fpr, roc.points[0].tpr), (0.0, 0.0));
        // Last point should be (1, 1)
        let last = roc.points.last().unwrap();
        assert_eq!((last.fpr, last.tpr), (1.0, 1.0));
    }

    #[test]
    fn tied_scores_share_a_threshold() {
        let labels = vec![1, 1, 0, 0];
        let scores = vec![0.5, 0.5, -1.0, 0.5];
        let roc = roc_curve(&scores, &labels, 1).unwrap();
        assert_eq!(roc.thresholds(), vec![f64::INFINITY, 0.5, -1.0]);
        assert!(close(roc.auc, 0.75));
    }

    #[test]
    fn hypothesis_demo_model_1_separates_perfectly() {
        let roc = roc_curve(&MODEL_1, &DEMO_LABELS, HYPOTHESIS_POSITIVE).unwrap();
        assert_eq!(roc.n_positive, 4);
        assert_eq!(roc.n_negative, 6);
        // Ten distinct scores plus the +inf origin.
        assert_eq!(roc.len(), 11);
        assert!(close(roc.auc, 1.0));
    }

    #[test]
    fn hypothesis_demo_model_2() {
        let roc = roc_curve(&MODEL_2, &DEMO_LABELS, HYPOTHESIS_POSITIVE).unwrap();
        assert_eq!(roc.len(), 11);
        // 21 of the 24 positive/negative pairs are ordered correctly.
        assert!(close(roc.auc, 0.875));
        assert!(roc.auc > 0.0 && roc.auc < 1.0);
    }

    #[test]
    fn positive_label_choice_flips_auc() {
        let as_h1 = roc_auc(&MODEL_2, &DEMO_LABELS, 0).unwrap();
        let as_h0 = roc_auc(&MODEL_2, &DEMO_LABELS, 1).unwrap();
        assert!(close(as_h1 + as_h0, 1.0));
    }

    #[test]
    fn drop_intermediate_trims_straight_runs() {
        let truth = BinaryTruth::from_hypotheses(&DEMO_LABELS).unwrap();
        let full = roc_curve_with(&MODEL_2, &truth, &RocConfig::default()).unwrap();
        let config = RocConfig {
            drop_intermediate: true,
        };
        let trimmed = roc_curve_with(&MODEL_2, &truth, &config).unwrap();

        // The three collinear points along tpr = 1 are dropped.
        assert_eq!(trimmed.len(), 8);
        assert_eq!(trimmed.thresholds()[..3], [f64::INFINITY, 0.9, 0.85]);
        assert_eq!(*trimmed.thresholds().last().unwrap(), 0.05);
        assert!(close(trimmed.auc, full.auc));
    }

    #[test]
    fn drop_intermediate_leaves_short_curves() {
        let truth = BinaryTruth::from_bools(&[true, false]).unwrap();
        let config = RocConfig {
            drop_intermediate: true,
        };
        let roc = roc_curve_with(&[0.9, 0.1], &truth, &config).unwrap();
        assert_eq!(roc.len(), 3);
    }

    #[test]
    fn roc_all_same_label_error() {
        let scores = vec![0.9, 0.8, 0.7];
        let labels = vec![1, 1, 1];
        let err = roc_curve(&scores, &labels, 0).unwrap_err();
        assert_eq!(err.input(), InputKind::Labels);
    }

    #[test]
    fn roc_empty_error() {
        let scores: Vec<f64> = vec![];
        let labels: Vec<u8> = vec![];
        let err = roc_curve(&scores, &labels, 0).unwrap_err();
        assert_eq!(err.input(), InputKind::Scores);
    }

    #[test]
    fn roc_length_mismatch_error() {
        let err = compute_roc(&[0.1, 0.2, 0.3], &[0, 1], 0).unwrap_err();
        assert_eq!(err.input(), InputKind::Labels);
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn roc_non_finite_score_error() {
        let err = roc_curve(&[0.1, f64::NAN, 0.3], &[0, 1, 0], 0).unwrap_err();
        assert_eq!(err.input(), InputKind::Scores);
        assert!(roc_curve(&[0.1, f64::INFINITY], &[0, 1], 0).is_err());
    }

    #[test]
    fn roc_summary() {
        let roc = roc_curve(&[0.9, 0.1], &[true, false], true).unwrap();
        assert_eq!(
            roc.summary(),
            "ROC: 3 points, 1 positives, 1 negatives, AUC=1.0000"
        );
        assert_eq!(roc.score(), roc.auc);
    }
}
