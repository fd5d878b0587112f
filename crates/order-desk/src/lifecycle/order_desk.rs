use crate::catalog::{Catalog, CatalogError};
use crate::clients::SessionClient;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::DeskError;
use crate::model::Storefront;
use crate::operator_view::OperatorView;
use crate::registry::SharedRegistry;
use crate::session_actor::{self, SessionContext};
use std::sync::Arc;
use tracing::{error, info};

/// Settings for [`OrderDesk::start`].
#[derive(Debug, Clone)]
pub struct DeskOptions {
    pub session_shards: usize,
    pub session_mailbox: usize,
    pub catalog: Arc<Catalog>,
    pub storefront: Storefront,
}

impl DeskOptions {
    /// Default shard and mailbox sizes and store front around `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            session_shards: Config::DEFAULT_SESSION_SHARDS,
            session_mailbox: Config::DEFAULT_SESSION_MAILBOX,
            catalog: Arc::new(catalog),
            storefront: Storefront::default(),
        }
    }

    /// Options for the Kana Foods catalog, sized and branded from `config`.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Ok(Self {
            session_shards: config.session_shards,
            session_mailbox: config.session_mailbox,
            storefront: config.storefront.clone(),
            ..Self::new(Catalog::kana_foods()?)
        })
    }
}

/// The running order desk: session actors plus the two entry points into them.
///
/// # Example
///
/// ```rust
/// use order_desk::catalog::Catalog;
/// use order_desk::lifecycle::{DeskOptions, OrderDesk};
/// use order_desk::model::CustomerId;
/// use order_desk::registry::InMemoryOrderRegistry;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let desk = OrderDesk::start(
///         DeskOptions::new(Catalog::kana_foods()?),
///         Arc::new(InMemoryOrderRegistry::new()),
///     );
///
///     let reply = desk.dispatcher.handle(CustomerId(1), "Abebe", "/start").await?;
///     assert!(reply.text.starts_with("Hi Abebe!"));
///     println!("{}", desk.operator_view.render().await?);
///
///     desk.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderDesk {
    /// Customer entry point.
    pub dispatcher: Dispatcher,

    /// Operator entry point.
    pub operator_view: OperatorView,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderDesk {
    /// Spawns the session actors and wires them to `registry`.
    ///
    /// Must be called from within a Tokio runtime. A shard count of zero is raised to one.
    pub fn start(options: DeskOptions, registry: SharedRegistry) -> Self {
        let shards = options.session_shards.max(1);
        let mailbox = options.session_mailbox.max(1);
        let context = SessionContext::new(options.catalog.clone(), registry.clone(), options.storefront);

        let mut clients = Vec::with_capacity(shards);
        let mut handles = Vec::with_capacity(shards);
        for _ in 0..shards {
            let (actor, client) = session_actor::new(mailbox);
            handles.push(tokio::spawn(actor.run(context.clone())));
            clients.push(SessionClient::new(client));
        }
        info!(shards, mailbox, "Order desk started");

        Self {
            dispatcher: Dispatcher::new(clients),
            operator_view: OperatorView::new(registry, options.catalog, context.storefront.clone()),
            handles,
        }
    }

    /// Stops every session actor and waits for it to finish.
    ///
    /// Actors stop once every [`Dispatcher`] clone is dropped, so listener tasks holding a
    /// clone must be finished first.
    pub async fn shutdown(self) -> Result<(), DeskError> {
        info!("Shutting down order desk...");
        drop(self.dispatcher);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Session actor task failed");
                return Err(e.into());
            }
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}
