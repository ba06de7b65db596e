//! Base trait for intents (user/system actions) in the MVI pattern.

/// Marker trait for intent objects.
///
/// An intent is anything a reducer consumes: a keypress routed by the
/// input layer, a mutation outcome reported by the store worker, or a
/// clock tick. Reducers turn intents into successor states.
pub trait Intent: Send + 'static {}
