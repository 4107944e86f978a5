//! Core trait definitions shared across the hyroc crates.

/// A type that carries a single numeric score (e.g. an AUC).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that carries a display name.
pub trait Annotated {
    /// A human-readable name or identifier.
    fn name(&self) -> &str;

    /// An optional description.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
