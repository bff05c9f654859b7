//! Error types for class validation and sampling.

/// Errors produced while validating classes or drawing samples.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SampleError {
    /// Returned when the sampling configuration is unusable.
    #[error("invalid sampling configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Returned when a class range is empty or not finite.
    #[error("class {id} has an unusable range [{min}, {max})")]
    InvalidClass {
        /// Identifier of the offending class.
        id: u32,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// Returned when two classes share an identifier.
    #[error("class id {id} is defined more than once")]
    DuplicateClassId {
        /// The repeated identifier.
        id: u32,
    },

    /// Returned when two class ranges overlap.
    ///
    /// Overlap makes class membership ambiguous, so it is rejected before
    /// any pixel is scanned.
    #[error("classes {first} and {second} have overlapping ranges")]
    OverlappingClasses {
        /// Identifier of the first offending class.
        first: u32,
        /// Identifier of the second offending class.
        second: u32,
    },
}
