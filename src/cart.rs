//! Shopping cart persisted in browser storage.
//!
//! The cart is an insertion-ordered list with at most one entry per product
//! id.  It is loaded once per mount and written back in full after every
//! mutation.

use std::rc::Rc;

use crate::constants::STORAGE_KEY_CART;
use crate::models::CartItem;
use crate::storage::{load_json, save_json, KeyValueStore};
use crate::{debug_log, warn_log};

/// Derive a product id from its display name: every run of whitespace
/// becomes a single `_`, then the result is lowercased.
///
/// `"Wireless Headphones"` -> `"wireless_headphones"`.
pub fn item_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('_');
            }
            in_whitespace = true;
        } else {
            id.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    id
}

pub struct CartStore {
    items: Vec<CartItem>,
    storage: Rc<dyn KeyValueStore>,
}

impl CartStore {
    /// Load the persisted cart.  Malformed data resets to an empty cart.
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let items = match load_json::<Vec<CartItem>>(storage.as_ref(), STORAGE_KEY_CART) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn_log!("{}; starting with an empty cart", e);
                Vec::new()
            }
        };
        Self { items, storage }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add one unit of a product.  An existing id has its quantity bumped,
    /// otherwise a new line is appended.  Returns the resulting line.
    pub fn add_item(&mut self, name: &str, price: f64) -> CartItem {
        let id = item_id(name);
        let item = match self.items.iter_mut().find(|item| item.id == id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.clone()
            }
            None => {
                let item = CartItem {
                    id,
                    name: name.to_string(),
                    price,
                    quantity: 1,
                };
                self.items.push(item.clone());
                item
            }
        };
        self.persist();
        debug_log!("Cart: {} x{} (total {})", item.id, item.quantity, self.total_quantity());
        item
    }

    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), STORAGE_KEY_CART, &self.items) {
            warn_log!("{}", e);
        }
    }
}
