//! # ActorClient Trait
//!
//! Common interface for entity-specific clients: a default `get` and `count` built on the
//! generic `ResourceClient`, with errors mapped into the client's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Cart { id: u32, items: u32 }
/// #[derive(Debug)] enum CartAction { Add }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CartError(String);
///
/// impl From<String> for CartError {
///     fn from(s: String) -> Self { CartError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Cart {
///     type Id = u32;
///     type Action = CartAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CartError;
///
///     fn spawn(id: u32) -> Self { Self { id, items: 0 } }
///     async fn handle_action(&mut self, _: CartAction, _: &()) -> Result<u32, CartError> {
///         self.items += 1;
///         Ok(self.items)
///     }
/// }
///
/// struct CartClient { inner: ResourceClient<Cart> }
///
/// #[async_trait]
/// impl ActorClient<Cart> for CartClient {
///     type Error = CartError;
///     fn inner(&self) -> &ResourceClient<Cart> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { CartError(e.to_string()) }
/// }
///
/// async fn usage(client: CartClient) {
///     // get() and count() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.count().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a live entity by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Number of live entities behind this client.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }
}
