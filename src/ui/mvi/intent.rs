//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user input (typing, moving the selection) or the
/// outcome of an effect (search completed). Reducers consume them.
pub trait Intent: Send + 'static {}
