//! Listener tasks, one per channel.
//!
//! The customer listener reads events in arrival order, enqueues each on its customer's
//! session right away, and sends replies back in that same order. Enqueueing is separate
//! from waiting, so slow customers do not hold up the inbox while replies still come out
//! in order.

use super::{CustomerReply, InboundEvent, Inbox, OperatorRequest, Outbox, TransportError};
use crate::dispatcher::Dispatcher;
use crate::operator_view::OperatorView;
use crate::reply::Reply;
use crate::session_actor::replies;
use futures::stream::{FuturesOrdered, StreamExt};
use tracing::{debug, info, warn};

/// Runs until the inbox closes and every queued reply has been sent.
pub async fn run_customer_listener<I, O>(
    mut inbox: I,
    outbox: O,
    dispatcher: Dispatcher,
) -> Result<(), TransportError>
where
    I: Inbox<InboundEvent>,
    O: Outbox<CustomerReply>,
{
    info!("Customer listener started");
    let mut in_flight = FuturesOrdered::new();
    let mut inbox_open = true;

    loop {
        tokio::select! {
            event = inbox.recv(), if inbox_open => match event {
                Some(event) => {
                    let customer_id = event.customer_id;
                    debug!(%customer_id, "Inbound");
                    let pending = dispatcher.submit(event).await;
                    in_flight.push_back(async move {
                        let result = match pending {
                            Ok(pending) => pending.wait().await,
                            Err(e) => Err(e),
                        };
                        (customer_id, result)
                    });
                }
                None => inbox_open = false,
            },
            Some((customer_id, result)) = in_flight.next(), if !in_flight.is_empty() => {
                let reply = result.unwrap_or_else(|e| {
                    warn!(%customer_id, error = %e, "Could not handle message");
                    replies::unavailable()
                });
                outbox.send(CustomerReply { customer_id, reply }).await?;
            }
            else => break,
        }
    }

    info!("Customer listener stopped");
    Ok(())
}

/// Answers operator commands one at a time until the inbox closes.
pub async fn run_operator_listener<I, O>(
    mut inbox: I,
    outbox: O,
    view: OperatorView,
) -> Result<(), TransportError>
where
    I: Inbox<OperatorRequest>,
    O: Outbox<Reply>,
{
    info!("Operator listener started");
    while let Some(request) = inbox.recv().await {
        let reply = match view.respond(&request.text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Operator request failed");
                Reply::text("Could not load orders right now. Please try again.")
            }
        };
        outbox.send(reply).await?;
    }
    info!("Operator listener stopped");
    Ok(())
}
