//! Color palettes for per-classifier style assignment.

use hyroc_core::{HyrocError, Result};

/// What to do when more curves are drawn than the palette has colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Wrap around and reuse colors from the start.
    #[default]
    Cycle,
    /// Refuse to assign a color past the end of the palette.
    Error,
}

/// A non-empty, ordered list of color names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<String>,
    policy: OverflowPolicy,
}

/// Colors used when no palette is configured.
pub const DEFAULT_COLORS: [&str; 6] = ["darkorange", "blue", "green", "red", "purple", "black"];

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            policy: OverflowPolicy::Cycle,
        }
    }
}

impl Palette {
    /// Build a palette from color names.
    pub fn new<I, S>(colors: I, policy: OverflowPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(HyrocError::palette("palette has no colors"));
        }
        Ok(Self { colors, policy })
    }

    /// Same colors, different overflow policy.
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overflow policy in effect.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(color_index, color)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.colors.iter().map(String::as_str).enumerate()
    }

    /// Color for the curve at `index`.
    pub fn color(&self, index: usize) -> Result<&str> {
        let n = self.colors.len();
        if index >= n {
            match self.policy {
                OverflowPolicy::Cycle => {
                    tracing::debug!(index, palette_len = n, "palette cycling");
                }
                OverflowPolicy::Error => {
                    return Err(HyrocError::palette(format!(
                        "curve {} needs a color but the palette only has {}",
                        index, n,
                    )));
                }
            }
        }
        Ok(&self.colors[index % n])
    }

    /// Colors for the first `count` curves.
    pub fn assign(&self, count: usize) -> Result<Vec<&str>> {
        (0..count).map(|i| self.color(i)).collect()
    }
}
