use crate::models::{CartItem, CreateOrderPayload, MenuItem, OrderData, OrderItemPayload};

/// Client-local, in-progress order. Lives only in memory and is discarded
/// after a successful checkout or when the user walks away.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct menu lines, not total quantity.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of a menu item. Adding a menu already in the cart bumps
    /// its quantity instead of creating a second line.
    pub fn add(&mut self, item: MenuItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.item.id == item.id) {
            existing.quantity += 1;
        } else {
            self.items.push(CartItem { item, quantity: 1 });
        }
    }

    /// Set the quantity of a line; zero removes it. Returns false when the
    /// menu is not in the cart.
    pub fn set_quantity(&mut self, menu_id: u32, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(menu_id).is_some();
        }
        match self.items.iter_mut().find(|line| line.item.id == menu_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, menu_id: u32) -> Option<CartItem> {
        let index = self.items.iter().position(|line| line.item.id == menu_id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_amount(&self) -> i64 {
        self.items
            .iter()
            .map(|line| line.item.price * i64::from(line.quantity))
            .sum()
    }

    pub fn to_order_payload(&self) -> CreateOrderPayload {
        CreateOrderPayload {
            items: self
                .items
                .iter()
                .map(|line| OrderItemPayload {
                    menu_id: line.item.id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }

    pub fn to_order_data(&self, payment_date: impl Into<String>) -> OrderData {
        OrderData {
            items: self.items.clone(),
            total_amount: self.total_amount(),
            payment_date: payment_date.into(),
        }
    }
}
