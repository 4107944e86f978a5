//! ROC comparison of several classifiers against one ground truth.

use hyroc_core::{Annotated, HyrocError, Result, Scored, Summarizable};
use hyroc_curve::{roc_curve_with, BinaryTruth, RocConfig, RocCurve, HYPOTHESIS_POSITIVE};

use crate::context::RenderContext;

/// Configuration for [`compare_classifiers`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Ground-truth value counted as positive. Defaults to `0` (H1 true).
    pub positive_label: u8,
    /// Options passed to every ROC computation.
    pub roc: RocConfig,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            positive_label: HYPOTHESIS_POSITIVE,
            roc: RocConfig::default(),
        }
    }
}

/// One classifier's ROC curve under its display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierCurve {
    /// Display label, as passed to [`compare_classifiers`].
    pub label: String,
    /// The classifier's ROC curve and AUC.
    pub curve: RocCurve,
}

impl Annotated for ClassifierCurve {
    fn name(&self) -> &str {
        &self.label
    }
}

impl Scored for ClassifierCurve {
    fn score(&self) -> f64 {
        self.curve.auc
    }
}

impl Summarizable for ClassifierCurve {
    fn summary(&self) -> String {
        format!("{}: {}", self.label, self.curve.summary())
    }
}

/// ROC curves for a set of classifiers sharing one ground truth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocComparison {
    /// Curves in the order the classifiers were given.
    pub curves: Vec<ClassifierCurve>,
}

impl RocComparison {
    /// Number of classifiers compared.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether no classifiers were compared.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Look up a classifier by label.
    pub fn get(&self, label: &str) -> Option<&ClassifierCurve> {
        self.curves.iter().find(|c| c.label == label)
    }

    /// Classifier with the highest AUC. Ties go to the earliest one.
    pub fn best(&self) -> Option<&ClassifierCurve> {
        self.curves
            .iter()
            .fold(None, |best: Option<&ClassifierCurve>, c| match best {
                Some(b) if b.score() >= c.score() => Some(b),
                _ => Some(c),
            })
    }

    /// Threshold sequence of each classifier, for diagnostics.
    pub fn thresholds(&self) -> Vec<(&str, Vec<f64>)> {
        self.curves
            .iter()
            .map(|c| (c.label.as_str(), c.curve.thresholds()))
            .collect()
    }

    /// Add every curve to `ctx`, in order.
    ///
    /// # Errors
    ///
    /// Fails when the context's palette cannot color every curve. Nothing is
    /// added to `ctx` in that case.
    pub fn render_into(&self, ctx: &mut RenderContext) -> Result<()> {
        if let Some(last) = (ctx.curves().len() + self.len()).checked_sub(1) {
            ctx.palette().color(last)?;
        }
        for c in &self.curves {
            ctx.add_curve(c.label.clone(), &c.curve)?;
        }
        Ok(())
    }
}

impl Summarizable for RocComparison {
    fn summary(&self) -> String {
        let best = self
            .best()
            .map(|c| format!(", best={} ({:.4})", c.label, c.curve.auc))
            .unwrap_or_default();
        format!("ROC comparison: {} classifiers{}", self.curves.len(), best)
    }
}

/// Compute a ROC curve for each classifier against the shared `ground_truth`.
///
/// `classifiers` and `names` are matched by position. `ground_truth` uses the
/// hypothesis labelling: `1` when H0 holds, `0` when H1 holds, and every
/// classifier's score must grow with the evidence against H0.
///
/// # Errors
///
/// Returns an error if there are no classifiers, the name count differs from
/// the classifier count, the ground truth is not a valid `0`/`1` labelling
/// with both classes present, or any classifier's scores are invalid. When
/// several classifiers are invalid, the error names the first of them.
pub fn compare_classifiers(
    classifiers: &[&[f64]],
    names: &[&str],
    ground_truth: &[u8],
    config: &CompareConfig,
) -> Result<RocComparison> {
    if classifiers.is_empty() {
        return Err(HyrocError::classifiers("no classifiers given"));
    }
    if classifiers.len() != names.len() {
        return Err(HyrocError::classifiers(format!(
            "{} classifiers but {} names",
            classifiers.len(),
            names.len(),
        )));
    }

    let truth = BinaryTruth::from_hypotheses_as(ground_truth, config.positive_label)?;

    let evaluate = |(scores, name): (&&[f64], &&str)| -> Result<ClassifierCurve> {
        let curve = roc_curve_with(scores, &truth, &config.roc)
            .map_err(|e| e.with_context(format!("classifier '{}'", name)))?;
        tracing::debug!(
            classifier = *name,
            samples = scores.len(),
            points = curve.len(),
            auc = curve.auc,
            "ROC curve computed"
        );
        Ok(ClassifierCurve {
            label: name.to_string(),
            curve,
        })
    };

    // Results are gathered in input order before the first error is taken,
    // so the reported classifier does not depend on scheduling.
    #[cfg(feature = "parallel")]
    let curves = {
        use rayon::prelude::*;
        classifiers
            .par_iter()
            .zip(names.par_iter())
            .map(evaluate)
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let curves = classifiers
        .iter()
        .zip(names.iter())
        .map(evaluate)
        .collect::<Result<Vec<_>>>()?;

    Ok(RocComparison { curves })
}
