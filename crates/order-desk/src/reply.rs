//! Outbound replies.
//!
//! A reply is plain text plus a hint about the customer's keyboard. Rendering buttons is
//! the transport's job; the core only says which of the three layouts applies.

/// Labels of the customer main menu, in display order.
pub const MENU_LABELS: [&str; 4] = [
    "1. Browse Products",
    "2. Place an Order",
    "3. Track Delivery",
    "4. Contact Support",
];

/// Keyboard layout to show alongside a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keyboard {
    /// Leave whatever the customer currently sees.
    #[default]
    Keep,
    /// Show the four main-menu labels.
    MainMenu,
    /// Remove the keyboard; the customer is expected to type.
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Keep,
        }
    }

    pub fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::MainMenu,
        }
    }

    pub fn hiding_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Hide,
        }
    }

    /// Labels to render with this reply, if any.
    pub fn menu_labels(&self) -> Option<&'static [&'static str]> {
        match self.keyboard {
            Keyboard::MainMenu => Some(&MENU_LABELS),
            Keyboard::Keep | Keyboard::Hide => None,
        }
    }
}
