//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are cloned into the next state by the reducer and compared with
/// `PartialEq` in tests. `Default` is the state before a screen mounts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
