/// Store details shown to customers in greetings, listings and totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub name: String,
    pub support_phone: String,
    /// Currency label appended to prices, e.g. `birr`.
    pub currency: String,
}

impl Default for Storefront {
    fn default() -> Self {
        Self {
            name: "Kana Foods".to_string(),
            support_phone: "+251 0986465604".to_string(),
            currency: "birr".to_string(),
        }
    }
}
