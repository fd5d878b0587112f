//! # Framework Errors
//!
//! Common error type shared by every actor and client. Entity-specific failures are boxed
//! into [`FrameworkError::EntityError`] so the plumbing stays generic.

/// Errors that can occur within the actor framework itself.
///
/// An unknown key is not an error: `get` answers `Ok(None)` and an action spawns the entity.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the entity's own error type, if this is an [`FrameworkError::EntityError`]
    /// carrying one.
    pub fn downcast_entity<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
