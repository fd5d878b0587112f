//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// - **Get**: read a snapshot of a live entity. `None` means the key has no live entity,
///   which for lazily spawned entities is the same as "resting".
/// - **Action**: run [`ActorEntity::handle_action`], spawning the entity first when the key
///   is unknown.
/// - **Count**: number of live entities held by this actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
