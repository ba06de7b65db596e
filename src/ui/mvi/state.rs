//! Base trait for UI state in the MVI pattern.

/// Marker trait for UI state objects.
///
/// States are value types: cloned to create successors, compared with
/// `PartialEq` to detect changes, and self-contained enough to render the
/// view from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
