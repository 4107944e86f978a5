//! Multi-classifier ROC comparison for hypothesis-testing workflows.
//!
//! [`compare_classifiers`] scores several classifiers against one shared
//! ground truth. The resulting [`RocComparison`] can be laid out into a
//! caller-owned [`RenderContext`], which records everything an external
//! renderer needs (palette colors, legend text, axes, reference diagonal)
//! without drawing anything itself.

pub mod compare;
pub mod context;
pub mod palette;

pub use compare::{compare_classifiers, ClassifierCurve, CompareConfig, RocComparison};
pub use context::{ReferenceLine, RenderContext, StyledCurve};
pub use palette::{OverflowPolicy, Palette};
