//! Caller-owned description of a ROC figure.
//!
//! A [`RenderContext`] collects styled curves and figure metadata. It is
//! handed to whatever renderer the caller uses; nothing here draws or writes
//! files.

use hyroc_core::{Annotated, Result, Scored};
use hyroc_curve::RocCurve;

use crate::palette::Palette;

/// The dashed chance-level diagonal from (0, 0) to (1, 1).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceLine {
    /// Start point, `(fpr, tpr)`.
    pub from: (f64, f64),
    /// End point, `(fpr, tpr)`.
    pub to: (f64, f64),
    /// Line color name.
    pub color: String,
    /// Draw dashed rather than solid.
    pub dashed: bool,
}

impl Default for ReferenceLine {
    fn default() -> Self {
        Self {
            from: (0.0, 0.0),
            to: (1.0, 1.0),
            color: "navy".to_string(),
            dashed: true,
        }
    }
}

/// A curve with its assigned color and legend label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledCurve {
    /// Classifier label shown in the legend.
    pub label: String,
    /// Position of the curve in the context, used to pick its color.
    pub color_index: usize,
    /// Color name taken from the palette.
    pub color: String,
    /// False positive rates (x coordinates).
    pub fpr: Vec<f64>,
    /// True positive rates (y coordinates).
    pub tpr: Vec<f64>,
    /// Area under the curve.
    pub auc: f64,
}

impl Annotated for StyledCurve {
    fn name(&self) -> &str {
        &self.label
    }
}

impl Scored for StyledCurve {
    fn score(&self) -> f64 {
        self.auc
    }
}

/// Figure state for one ROC comparison plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderContext {
    /// Figure title.
    pub title: String,
    /// Label of the false positive rate axis.
    pub x_label: String,
    /// Label of the true positive rate axis.
    pub y_label: String,
    /// Visible x-axis interval.
    pub x_range: (f64, f64),
    /// Visible y-axis interval.
    pub y_range: (f64, f64),
    /// Chance-level diagonal drawn behind the curves.
    pub reference: ReferenceLine,
    /// Decimal places used for the AUC in legend entries.
    pub auc_precision: usize,
    palette: Palette,
    curves: Vec<StyledCurve>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            title: "ROC Consensus Set Labelling Plot".to_string(),
            x_label: "False Positive Rate".to_string(),
            y_label: "True Positive Rate".to_string(),
            x_range: (0.0, 1.0),
            // Headroom so a curve along tpr = 1 stays visible.
            y_range: (0.0, 1.05),
            reference: ReferenceLine::default(),
            auc_precision: 6,
            palette: Palette::default(),
            curves: Vec::new(),
        }
    }
}

impl RenderContext {
    /// An empty figure with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the figure title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the palette. Colors are assigned as curves are added, so this
    /// should be set before the first [`add_curve`](Self::add_curve).
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the decimal places of the AUC in legend entries.
    pub fn with_auc_precision(mut self, decimals: usize) -> Self {
        self.auc_precision = decimals;
        self
    }

    /// Palette colors are assigned from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Curves added so far, in order.
    pub fn curves(&self) -> &[StyledCurve] {
        &self.curves
    }

    /// Add a curve, assigning it the next palette color.
    ///
    /// # Errors
    ///
    /// Fails when the palette's [`OverflowPolicy`](crate::OverflowPolicy) is
    /// `Error` and every color is already taken. The context is left
    /// unchanged in that case.
    pub fn add_curve(
        &mut self,
        label: impl Into<String>,
        curve: &RocCurve,
    ) -> Result<&StyledCurve> {
        let color_index = self.curves.len();
        let color = self.palette.color(color_index)?.to_string();
        self.curves.push(StyledCurve {
            label: label.into(),
            color_index,
            color,
            fpr: curve.fpr(),
            tpr: curve.tpr(),
            auc: curve.auc,
        });
        Ok(&self.curves[color_index])
    }

    /// Legend text for each curve, e.g. `"Model 1 (area = 0.875000)"`.
    pub fn legend_entries(&self) -> Vec<String> {
        self.curves
            .iter()
            .map(|c| format!("{} (area = {:.*})", c.label, self.auc_precision, c.auc))
            .collect()
    }

    /// Drop all curves, keeping figure settings.
    pub fn clear(&mut self) {
        self.curves.clear();
    }
}
