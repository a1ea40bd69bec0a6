//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a named transition: a key press, a submitted form, an API
/// response arriving. State never changes except through one.
pub trait Intent: Send + 'static {}
