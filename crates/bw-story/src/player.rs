//! Player state: health, inventory, and knowledge flags.

use std::collections::HashMap;

use crate::item::Item;

/// The player's mutable state for one run through the mansion.
#[derive(Debug, Clone)]
pub struct PlayerState {
    health: u32,
    max_health: u32,
    /// Items held, in acquisition order. Never contains duplicates.
    inventory: Vec<Item>,
    /// One-shot world facts (e.g. that the basement crate was searched).
    knowledge: HashMap<String, bool>,
}

impl PlayerState {
    /// Create a player at full health with an empty inventory.
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            inventory: Vec::new(),
            knowledge: HashMap::new(),
        }
    }

    /// Current health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Reduce health by `amount`, flooring at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restore health by `amount`, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Whether the player is still alive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        if !self.inventory.contains(&item) {
            self.inventory.push(item);
        }
    }

    /// Whether the player holds an item.
    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Remove an item from the inventory. Returns whether it was held.
    pub fn remove_item(&mut self, item: Item) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// The items held, in acquisition order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Whether a knowledge flag is set.
    pub fn has_knowledge(&self, key: &str) -> bool {
        self.knowledge.get(key).copied().unwrap_or(false)
    }

    /// Set a knowledge flag.
    pub fn set_knowledge(&mut self, key: impl Into<String>, value: bool) {
        self.knowledge.insert(key.into(), value);
    }
}
