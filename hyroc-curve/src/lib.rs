//! ROC curve and AUC computation for binary classifiers.
//!
//! - **Ground truth** — [`BinaryTruth`] validates a two-valued label vector
//!   against a chosen positive label
//! - **ROC curve** — [`compute_roc`] / [`roc_curve`] sweep every distinct
//!   score threshold and report (FPR, TPR) pairs
//! - **AUC** — [`compute_auc`] integrates a rate sequence with the
//!   trapezoidal rule
//!
//! In the hypothesis-testing convention used here, label `1` means H0 is true
//! and label `0` means H1 is true. Scores grow with the evidence against H0,
//! so label `0` is the positive class; see [`labels::HYPOTHESIS_POSITIVE`].

pub mod auc;
pub mod labels;
pub mod roc;

pub use auc::compute_auc;
pub use labels::{BinaryTruth, H0_TRUE, H1_TRUE, HYPOTHESIS_POSITIVE};
pub use roc::{compute_roc, roc_auc, roc_curve, roc_curve_with, RocConfig, RocCurve, RocPoint};
