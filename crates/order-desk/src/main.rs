//! # Order Desk
//!
//! Runs the order desk against the console: customer messages and operator commands are
//! read from stdin and replies are printed to stdout. See
//! [`transport::console`](order_desk::transport::console) for the line format.
//!
//! ```bash
//! BOT_TOKEN=x ADMIN_TOKEN=y RUST_LOG=debug cargo run -p order-desk
//! ```

use actor_framework::tracing::setup_tracing;
use order_desk::config::Config;
use order_desk::error::DeskError;
use order_desk::lifecycle::{DeskOptions, OrderDesk};
use order_desk::registry::InMemoryOrderRegistry;
use order_desk::transport::console::{self, ConsoleOutbox};
use order_desk::transport::{memory, run_customer_listener, run_operator_listener};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), DeskError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(?config, "Configuration loaded");

    let options = DeskOptions::from_config(&config)
        .inspect_err(|e| error!(error = %e, "Invalid catalog"))?;
    let desk = OrderDesk::start(options, Arc::new(InMemoryOrderRegistry::new()));

    let (customer_tx, customer_inbox) = memory::inbox(config.session_mailbox);
    let (operator_tx, operator_inbox) = memory::inbox(config.session_mailbox);

    let customers = tokio::spawn(run_customer_listener(
        customer_inbox,
        ConsoleOutbox,
        desk.dispatcher.clone(),
    ));
    let operator = tokio::spawn(run_operator_listener(
        operator_inbox,
        ConsoleOutbox,
        desk.operator_view.clone(),
    ));

    let reader = console::read_lines(BufReader::new(tokio::io::stdin()), customer_tx, operator_tx);
    tokio::select! {
        result = reader => {
            if let Err(e) = result {
                warn!(error = %e, "Console input failed");
            }
        }
        _ = tokio::signal::ctrl_c() => info!("Interrupted"),
    }

    // The senders are gone now, so both listeners drain and return.
    customers.await??;
    operator.await??;

    desk.shutdown().await?;
    info!("Order desk stopped");
    Ok(())
}
