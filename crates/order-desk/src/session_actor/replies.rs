//! Customer-facing reply texts.

use crate::catalog::Catalog;
use crate::model::{Order, Product, Storefront};
use crate::reply::Reply;

pub fn welcome(display_name: &str, store: &Storefront) -> Reply {
    let name = if display_name.trim().is_empty() {
        "there"
    } else {
        display_name.trim()
    };
    Reply::with_menu(format!(
        "Hi {name}! 👋 Welcome to {}.\n\n\
         I can help you order food supplies. What would you like to do today?\n\n\
         For assistance, contact: {}",
        store.name, store.support_phone
    ))
}

pub fn product_list(catalog: &Catalog, store: &Storefront) -> Reply {
    let mut lines = vec!["Available products:".to_string()];
    lines.extend(catalog.list_all().iter().map(|p| {
        format!("{} — {} — {} {}", p.id, p.name, p.unit_price, store.currency)
    }));
    Reply::with_menu(lines.join("\n"))
}

pub fn contact(store: &Storefront) -> Reply {
    Reply::with_menu(format!("📞 Contact Support:\n{}", store.support_phone))
}

pub fn choose_option() -> Reply {
    Reply::with_menu("Please choose an option from the menu.")
}

pub fn ask_product() -> Reply {
    Reply::hiding_menu("Please send the PRODUCT ID you want to buy (e.g. P001):")
}

pub fn invalid_product() -> Reply {
    Reply::text("Invalid product ID. Try again (e.g. P001).")
}

pub fn ask_quantity(product: &Product) -> Reply {
    Reply::text(format!("How many units of {}?", product.name))
}

pub fn not_a_number() -> Reply {
    Reply::text("Please send a number for quantity.")
}

pub fn confirm_prompt(product: &Product, quantity: u32, store: &Storefront) -> Reply {
    Reply::text(format!(
        "Confirm order:\n{} × {}\nTotal: {} {}\n\nType 'yes' to confirm or 'no' to cancel.",
        product.name,
        quantity,
        product.total_for(quantity),
        store.currency
    ))
}

pub fn placed(product: &Product, order: &Order, store: &Storefront) -> Reply {
    Reply::with_menu(format!(
        "✅ Order placed! {} × {}, total {} {}. We’ll contact you soon.",
        product.name, order.quantity, order.total, store.currency
    ))
}

pub fn declined() -> Reply {
    Reply::with_menu("❌ Order cancelled.")
}

pub fn cancelled() -> Reply {
    Reply::with_menu("Order cancelled.")
}

pub fn unknown_command(command: &str) -> Reply {
    Reply::text(format!(
        "Unknown command {command}. Answer the question above, or send /cancel to stop this order."
    ))
}

pub fn track(order: Option<&Order>, catalog: &Catalog) -> Reply {
    match order {
        Some(order) => {
            let product_name = catalog
                .lookup(&order.product_id)
                .map(|p| p.name.as_str())
                .unwrap_or(order.product_id.as_str());
            Reply::with_menu(format!(
                "📦 Your last order:\n{} × {} pcs\nStatus: {}",
                product_name, order.quantity, order.status
            ))
        }
        None => Reply::with_menu("You don't have any active orders."),
    }
}

pub fn unavailable() -> Reply {
    Reply::with_menu("Sorry, something went wrong on our side. Please try again in a moment.")
}
