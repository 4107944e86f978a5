//! Ground-truth label validation.

use std::fmt::Debug;

use hyroc_core::{HyrocError, Result};

/// Label value meaning "H0 is true".
pub const H0_TRUE: u8 = 1;
/// Label value meaning "H1 is true".
pub const H1_TRUE: u8 = 0;
/// The label treated as positive for hypothesis-testing ROC analysis.
///
/// A higher score is more evidence against H0, so samples where H1 holds are
/// the ones a good classifier ranks first.
pub const HYPOTHESIS_POSITIVE: u8 = H1_TRUE;

/// Binary ground truth resolved against a positive label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTruth {
    positive: Vec<bool>,
    n_positive: usize,
}

impl BinaryTruth {
    /// Resolve `labels` against `positive_label`.
    ///
    /// Every label must equal `positive_label` or one other value, and both
    /// classes must be present.
    pub fn from_labels<L>(labels: &[L], positive_label: L) -> Result<Self>
    where
        L: Copy + PartialEq + Debug,
    {
        if labels.is_empty() {
            return Err(HyrocError::labels("empty input"));
        }

        let mut negative_label: Option<L> = None;
        let mut positive = Vec::with_capacity(labels.len());
        for (i, &label) in labels.iter().enumerate() {
            if label == positive_label {
                positive.push(true);
                continue;
            }
            match negative_label {
                None => negative_label = Some(label),
                Some(neg) if neg == label => {}
                Some(neg) => {
                    return Err(HyrocError::labels(format!(
                        "label at index {} ({:?}) is neither the positive label {:?} \
                         nor the negative label {:?}",
                        i, label, positive_label, neg,
                    )));
                }
            }
            positive.push(false);
        }

        Self::from_membership(positive, &format!("{:?}", positive_label))
    }

    /// Resolve the `0`/`1` hypothesis labelling, with [`HYPOTHESIS_POSITIVE`]
    /// as the positive class.
    ///
    /// Unlike [`from_labels`](Self::from_labels), any value other than `0`
    /// or `1` is rejected even when only two distinct values occur.
    pub fn from_hypotheses(labels: &[u8]) -> Result<Self> {
        Self::from_hypotheses_as(labels, HYPOTHESIS_POSITIVE)
    }

    /// Resolve the `0`/`1` hypothesis labelling with an explicit positive
    /// label, which must itself be `0` or `1`.
    pub fn from_hypotheses_as(labels: &[u8], positive_label: u8) -> Result<Self> {
        if positive_label != H0_TRUE && positive_label != H1_TRUE {
            return Err(HyrocError::labels(format!(
                "positive label {} is not a hypothesis label",
                positive_label,
            )));
        }
        if let Some((i, &label)) = labels
            .iter()
            .enumerate()
            .find(|&(_, &l)| l != H0_TRUE && l != H1_TRUE)
        {
            return Err(HyrocError::labels(format!(
                "label at index {} is {}, expected {} (H1 true) or {} (H0 true)",
                i, label, H1_TRUE, H0_TRUE,
            )));
        }
        Self::from_labels(labels, positive_label)
    }

    /// Use boolean labels directly, `true` being positive.
    pub fn from_bools(labels: &[bool]) -> Result<Self> {
        if labels.is_empty() {
            return Err(HyrocError::labels("empty input"));
        }
        Self::from_membership(labels.to_vec(), "true")
    }

    fn from_membership(positive: Vec<bool>, positive_name: &str) -> Result<Self> {
        let n_positive = positive.iter().filter(|&&p| p).count();
        if n_positive == 0 {
            return Err(HyrocError::labels(format!(
                "no samples carry the positive label {}",
                positive_name,
            )));
        }
        if n_positive == positive.len() {
            return Err(HyrocError::labels(format!(
                "every sample carries the positive label {}; no negative samples",
                positive_name,
            )));
        }
        Ok(Self {
            positive,
            n_positive,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positive.len()
    }

    /// Always `false`: construction rejects empty label vectors.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }

    /// Whether sample `i` belongs to the positive class.
    pub fn is_positive(&self, i: usize) -> bool {
        self.positive[i]
    }

    /// Per-sample positive membership.
    pub fn as_slice(&self) -> &[bool] {
        &self.positive
    }

    /// Count of positive samples (P).
    pub fn n_positive(&self) -> usize {
        self.n_positive
    }

    /// Count of negative samples (Ng).
    pub fn n_negative(&self) -> usize {
        self.positive.len() - self.n_positive
    }
}
