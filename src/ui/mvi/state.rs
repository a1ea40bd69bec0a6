//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are owned values, cloned and compared cheaply; a view holds no
/// private copy, only the local form state the reducer manages for it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
