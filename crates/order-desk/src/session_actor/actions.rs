//! Actions understood by an [`OrderSession`](crate::session_actor::OrderSession), and the
//! small parsers that classify raw customer text.

/// One customer message, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// `/start`: greet the customer and show the menu.
    Start { display_name: String },
    /// `/cancel`: abandon whatever is in progress.
    Cancel,
    /// Any other slash command.
    UnknownCommand(String),
    /// Free text: a menu choice at rest, or the answer to the current prompt.
    Text { display_name: String, text: String },
}

impl SessionAction {
    /// Classifies a raw message.
    ///
    /// Commands are matched case-insensitively and may carry a `@botname` suffix
    /// (`/start@KanaFoodsBot`), as chat clients add one in group chats.
    pub fn from_message(display_name: &str, raw_text: &str) -> Self {
        let trimmed = raw_text.trim();
        if let Some(rest) = trimmed.strip_prefix('/') {
            let word = rest.split_whitespace().next().unwrap_or_default();
            let command = word.split('@').next().unwrap_or_default().to_lowercase();
            return match command.as_str() {
                "start" => SessionAction::Start {
                    display_name: display_name.to_string(),
                },
                "cancel" => SessionAction::Cancel,
                _ => SessionAction::UnknownCommand(format!("/{command}")),
            };
        }
        SessionAction::Text {
            display_name: display_name.to_string(),
            text: trimmed.to_string(),
        }
    }
}

/// Top-level menu entries available while no order is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Browse,
    PlaceOrder,
    Track,
    Contact,
}

impl MenuChoice {
    /// Matches menu button labels and loose variants of them.
    ///
    /// Text matches when it contains the entry's keyword (`browse`, `place`, `track`,
    /// `contact`, any case) or starts with the entry's number (`1`..`4`). Checked in menu
    /// order, so the first matching entry wins.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        let matches = |keyword: &str, number: char| text.contains(keyword) || text.starts_with(number);

        if matches("browse", '1') {
            Some(MenuChoice::Browse)
        } else if matches("place", '2') {
            Some(MenuChoice::PlaceOrder)
        } else if matches("track", '3') {
            Some(MenuChoice::Track)
        } else if matches("contact", '4') {
            Some(MenuChoice::Contact)
        } else {
            None
        }
    }
}

/// A positive quantity written as plain ASCII digits.
pub fn parse_quantity(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok().filter(|q| *q > 0)
}

/// `yes` or `y`, any case.
pub fn is_affirmative(text: &str) -> bool {
    matches!(text.trim().to_lowercase().as_str(), "yes" | "y")
}
