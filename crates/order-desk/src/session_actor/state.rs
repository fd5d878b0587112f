//! The per-customer ordering state machine.
//!
//! [`OrderSession::advance`] is pure: it reads the catalog, moves the state and says what
//! should happen next. Effects that touch the registry (storing a confirmed order, looking
//! one up for tracking) are returned as [`Step`] variants and carried out by the actor.

use super::actions::{is_affirmative, parse_quantity, MenuChoice, SessionAction};
use super::replies;
use crate::catalog::Catalog;
use crate::model::{CustomerId, Order, ProductId, Storefront};
use crate::reply::Reply;

/// Where a customer is in the ordering flow.
///
/// The product and quantity are carried by the variants that need them, so a session can
/// never hold a quantity without a product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingProduct,
    AwaitingQuantity {
        product_id: ProductId,
    },
    AwaitingConfirmation {
        product_id: ProductId,
        quantity: u32,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingProduct => "awaiting_product",
            SessionState::AwaitingQuantity { .. } => "awaiting_quantity",
            SessionState::AwaitingConfirmation { .. } => "awaiting_confirmation",
        }
    }
}

/// What the actor must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Send this reply; nothing else to do.
    Reply(Reply),
    /// Store `order` in the registry, then send `reply`.
    Place { order: Order, reply: Reply },
    /// Look up the customer's order and report it.
    Track,
}

/// Conversation state for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSession {
    pub customer_id: CustomerId,
    pub state: SessionState,
}

impl OrderSession {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            state: SessionState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    pub fn selected_product(&self) -> Option<&ProductId> {
        match &self.state {
            SessionState::AwaitingQuantity { product_id }
            | SessionState::AwaitingConfirmation { product_id, .. } => Some(product_id),
            SessionState::Idle | SessionState::AwaitingProduct => None,
        }
    }

    pub fn selected_quantity(&self) -> Option<u32> {
        match &self.state {
            SessionState::AwaitingConfirmation { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// Applies one customer action.
    pub fn advance(&mut self, action: SessionAction, catalog: &Catalog, store: &Storefront) -> Step {
        match action {
            SessionAction::Start { display_name } => {
                Step::Reply(replies::welcome(&display_name, store))
            }
            SessionAction::Cancel => {
                self.state = SessionState::Idle;
                Step::Reply(replies::cancelled())
            }
            SessionAction::UnknownCommand(command) => {
                if self.is_idle() {
                    Step::Reply(replies::choose_option())
                } else {
                    Step::Reply(replies::unknown_command(&command))
                }
            }
            SessionAction::Text { display_name, text } => {
                self.on_text(&display_name, &text, catalog, store)
            }
        }
    }

    fn on_text(&mut self, display_name: &str, text: &str, catalog: &Catalog, store: &Storefront) -> Step {
        match std::mem::take(&mut self.state) {
            SessionState::Idle => match MenuChoice::parse(text) {
                Some(MenuChoice::Browse) => Step::Reply(replies::product_list(catalog, store)),
                Some(MenuChoice::PlaceOrder) => {
                    self.state = SessionState::AwaitingProduct;
                    Step::Reply(replies::ask_product())
                }
                Some(MenuChoice::Track) => Step::Track,
                Some(MenuChoice::Contact) => Step::Reply(replies::contact(store)),
                None => Step::Reply(replies::choose_option()),
            },

            SessionState::AwaitingProduct => {
                let product = ProductId::parse(text).and_then(|id| catalog.lookup(&id).ok());
                match product {
                    Some(product) => {
                        self.state = SessionState::AwaitingQuantity {
                            product_id: product.id.clone(),
                        };
                        Step::Reply(replies::ask_quantity(product))
                    }
                    None => {
                        self.state = SessionState::AwaitingProduct;
                        Step::Reply(replies::invalid_product())
                    }
                }
            }

            SessionState::AwaitingQuantity { product_id } => {
                let Ok(product) = catalog.lookup(&product_id) else {
                    self.state = SessionState::AwaitingProduct;
                    return Step::Reply(replies::invalid_product());
                };
                match parse_quantity(text) {
                    Some(quantity) => {
                        let reply = replies::confirm_prompt(product, quantity, store);
                        self.state = SessionState::AwaitingConfirmation {
                            product_id,
                            quantity,
                        };
                        Step::Reply(reply)
                    }
                    None => {
                        self.state = SessionState::AwaitingQuantity { product_id };
                        Step::Reply(replies::not_a_number())
                    }
                }
            }

            // Any answer ends the flow; only an explicit yes places the order.
            SessionState::AwaitingConfirmation {
                product_id,
                quantity,
            } => {
                if !is_affirmative(text) {
                    return Step::Reply(replies::declined());
                }
                match catalog.lookup(&product_id) {
                    Ok(product) => {
                        let order = Order::confirmed(self.customer_id, display_name, product, quantity);
                        let reply = replies::placed(product, &order, store);
                        Step::Place { order, reply }
                    }
                    Err(_) => Step::Reply(replies::declined()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::Keyboard;

    fn text(s: &str) -> SessionAction {
        SessionAction::Text {
            display_name: "Abebe".into(),
            text: s.into(),
        }
    }

    fn reply_text(step: Step) -> String {
        match step {
            Step::Reply(reply) => reply.text,
            other => panic!("expected a plain reply, got {:?}", other),
        }
    }

    fn session_in(state: SessionState) -> OrderSession {
        OrderSession {
            customer_id: CustomerId(1),
            state,
        }
    }

    fn p(id: &str) -> ProductId {
        ProductId::parse(id).unwrap()
    }

    #[test]
    fn test_full_order_flow() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let mut session = OrderSession::new(CustomerId(1));

        let step = session.advance(text("2. Place an Order"), &catalog, &store);
        assert_eq!(session.state, SessionState::AwaitingProduct);
        match step {
            Step::Reply(reply) => assert_eq!(reply.keyboard, Keyboard::Hide),
            other => panic!("unexpected {:?}", other),
        }

        let reply = reply_text(session.advance(text("p001"), &catalog, &store));
        assert!(reply.contains("Mozzorel Cheese"));
        assert_eq!(session.selected_product(), Some(&p("P001")));

        let reply = reply_text(session.advance(text("3"), &catalog, &store));
        assert!(reply.contains("2400"));
        assert_eq!(session.selected_quantity(), Some(3));

        match session.advance(text("YES"), &catalog, &store) {
            Step::Place { order, reply } => {
                assert_eq!(order.customer_id, CustomerId(1));
                assert_eq!(order.customer_name, "Abebe");
                assert_eq!(order.product_id, p("P001"));
                assert_eq!(order.quantity, 3);
                assert_eq!(order.total, 2400);
                assert!(reply.text.contains("Mozzorel Cheese"));
                assert!(reply.text.contains("2400"));
                assert_eq!(reply.keyboard, Keyboard::MainMenu);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(session.is_idle());
    }

    #[test]
    fn test_invalid_product_keeps_waiting() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let mut session = session_in(SessionState::AwaitingProduct);

        for bad in ["P999", "X001", "hello", ""] {
            let reply = reply_text(session.advance(text(bad), &catalog, &store));
            assert!(reply.starts_with("Invalid product ID"));
            assert_eq!(session.state, SessionState::AwaitingProduct);
        }
    }

    #[test]
    fn test_bad_quantity_reprompts() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let state = SessionState::AwaitingQuantity {
            product_id: p("P002"),
        };
        let mut session = session_in(state.clone());

        for bad in ["0", "abc", "-1", "2.5"] {
            let reply = reply_text(session.advance(text(bad), &catalog, &store));
            assert_eq!(reply, "Please send a number for quantity.");
            assert_eq!(session.state, state);
        }
    }

    #[test]
    fn test_anything_but_yes_declines() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        for answer in ["no", "maybe", "yess"] {
            let mut session = session_in(SessionState::AwaitingConfirmation {
                product_id: p("P003"),
                quantity: 2,
            });
            let reply = reply_text(session.advance(text(answer), &catalog, &store));
            assert_eq!(reply, "❌ Order cancelled.");
            assert!(session.is_idle());
        }
    }

    #[test]
    fn test_cancel_from_every_state() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let states = [
            SessionState::Idle,
            SessionState::AwaitingProduct,
            SessionState::AwaitingQuantity {
                product_id: p("P001"),
            },
            SessionState::AwaitingConfirmation {
                product_id: p("P001"),
                quantity: 1,
            },
        ];
        for state in states {
            let mut session = session_in(state);
            let step = session.advance(SessionAction::Cancel, &catalog, &store);
            assert_eq!(reply_text(step), "Order cancelled.");
            assert!(session.is_idle());
        }
    }

    #[test]
    fn test_idle_menu_choices() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let mut session = OrderSession::new(CustomerId(5));

        let listing = reply_text(session.advance(text("1. Browse Products"), &catalog, &store));
        assert!(listing.starts_with("Available products:"));
        assert!(listing.contains("P001 — Mozzorel Cheese — 800 birr"));
        assert!(listing.contains("P005 — Breast Chicken — 920 birr"));

        assert_eq!(session.advance(text("3. Track Delivery"), &catalog, &store), Step::Track);

        let contact = reply_text(session.advance(text("contact"), &catalog, &store));
        assert!(contact.contains("+251 0986465604"));

        let fallback = reply_text(session.advance(text("what?"), &catalog, &store));
        assert_eq!(fallback, "Please choose an option from the menu.");
        assert!(session.is_idle());
    }

    #[test]
    fn test_start_and_unknown_commands_keep_state() {
        let catalog = Catalog::kana_foods().unwrap();
        let store = Storefront::default();
        let state = SessionState::AwaitingQuantity {
            product_id: p("P004"),
        };
        let mut session = session_in(state.clone());

        let welcome = reply_text(session.advance(
            SessionAction::Start {
                display_name: String::new(),
            },
            &catalog,
            &store,
        ));
        assert!(welcome.starts_with("Hi there!"));
        assert_eq!(session.state, state);

        let hint = reply_text(session.advance(
            SessionAction::UnknownCommand("/orders".into()),
            &catalog,
            &store,
        ));
        assert!(hint.contains("/cancel"));
        assert_eq!(session.state, state);
    }
}
