//! Error types for the session actor.

use crate::registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while handling a customer message.
///
/// Customer mistakes (a bad product id, a non-numeric quantity) are not errors: they are
/// answered with a reprompt. These variants cover infrastructure only.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The order registry rejected a read or write.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
