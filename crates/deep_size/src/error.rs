//! Errors surfaced by measurement.

/// Internal-consistency failure during measurement.
///
/// Ordinary inputs (null roots, empty arrays, cycles) always produce a count;
/// this is reserved for a by-value slot that reports no value. Besides
/// hand-written descriptors that omit a value, that happens when a cell or
/// lock is held for writing at the moment the walk reaches it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    /// A by-value field or element could not be read.
    #[error("by-value field `{field}` of `{type_name}` reported no value")]
    MissingValue {
        type_name: &'static str,
        field: &'static str,
    },
}

/// Result of a measurement.
pub type SizeResult<T = u64> = Result<T, SizeError>;
