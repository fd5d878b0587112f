//! Console adapter for running the desk from a terminal.
//!
//! Input lines:
//!
//! ```text
//! 42/Abebe: 2. Place an Order     customer 42, display name "Abebe"
//! 42: P001                        customer 42, no display name
//! admin: /orders                  operator channel
//! ```
//!
//! Replies are printed to stdout, customer replies prefixed with the customer id.

use super::{CustomerReply, InboundEvent, OperatorRequest, Outbox, TransportError};
use crate::model::CustomerId;
use crate::reply::Reply;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Customer(InboundEvent),
    Operator(OperatorRequest),
}

impl ConsoleLine {
    pub fn parse(line: &str) -> Result<Self, TransportError> {
        let malformed = || TransportError::Malformed(line.to_string());
        let (sender, text) = line.split_once(':').ok_or_else(malformed)?;
        let (sender, text) = (sender.trim(), text.trim());

        if sender.eq_ignore_ascii_case("admin") {
            return Ok(ConsoleLine::Operator(OperatorRequest {
                text: text.to_string(),
            }));
        }

        let (id, name) = sender.split_once('/').unwrap_or((sender, ""));
        let id: i64 = id.trim().parse().map_err(|_| malformed())?;
        Ok(ConsoleLine::Customer(InboundEvent::new(
            CustomerId(id),
            name.trim(),
            text,
        )))
    }
}

/// Reads lines until EOF, routing each to the customer or operator channel.
///
/// Malformed lines are logged and skipped. Returns when the reader is exhausted or a
/// channel closes; dropping the senders then closes both inboxes.
pub async fn read_lines<R>(
    reader: R,
    customers: mpsc::Sender<InboundEvent>,
    operator: mpsc::Sender<OperatorRequest>,
) -> Result<(), TransportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match ConsoleLine::parse(&line) {
            Ok(ConsoleLine::Customer(event)) => {
                customers.send(event).await.map_err(|_| TransportError::Closed)?
            }
            Ok(ConsoleLine::Operator(request)) => {
                operator.send(request).await.map_err(|_| TransportError::Closed)?
            }
            Err(e) => warn!(error = %e, "Skipping line"),
        }
    }
    info!("Console input closed");
    Ok(())
}

/// Prints replies to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutbox;

impl ConsoleOutbox {
    async fn print(&self, prefix: &str, reply: &Reply) -> Result<(), TransportError> {
        let mut out = String::new();
        for line in reply.text.lines() {
            out.push_str(prefix);
            out.push_str(line);
            out.push('\n');
        }
        if let Some(labels) = reply.menu_labels() {
            let buttons: Vec<String> = labels.iter().map(|l| format!("[{l}]")).collect();
            out.push_str(prefix);
            out.push_str(&buttons.join(" "));
            out.push('\n');
        }
        let mut stdout = tokio::io::stdout();
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Outbox<CustomerReply> for ConsoleOutbox {
    async fn send(&self, message: CustomerReply) -> Result<(), TransportError> {
        self.print(&format!("[to {}] ", message.customer_id), &message.reply).await
    }
}

#[async_trait]
impl Outbox<Reply> for ConsoleOutbox {
    async fn send(&self, message: Reply) -> Result<(), TransportError> {
        self.print("[to admin] ", &message).await
    }
}
