//! Choices, the conditions that gate them, and the effects they apply.

/// Conditions evaluated against player state.
pub mod condition;
/// Effects applied when a choice is selected.
pub mod effect;

pub use condition::Condition;
pub use effect::Effect;

use crate::player::PlayerState;
use crate::scene::Scene;

/// What to show the player after a choice is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    /// Nothing beyond the next scene's narrative.
    #[default]
    None,
    /// A fixed narrative response.
    Text(&'static str),
    /// The current inventory listing.
    Inventory,
}

/// A single menu option in a scene.
///
/// A scene's full choice list is filtered by each choice's conditions and
/// the survivors are numbered `1..=n` in definition order, so gated options
/// vanish without renumbering the ones before them.
#[derive(Debug, Clone)]
pub struct Choice {
    /// The menu label shown to the player.
    pub label: &'static str,
    /// All conditions must hold for the choice to be offered.
    pub conditions: Vec<Condition>,
    /// Response shown when the choice is selected.
    pub response: Response,
    /// Effects applied when the choice is selected.
    pub effects: Vec<Effect>,
    /// The scene to move to afterwards.
    pub goto: Scene,
    /// Whether the frontend should wait for acknowledgment after the
    /// response, before rendering the next scene.
    pub pause: bool,
}

impl Choice {
    /// Create a choice with the given label and destination.
    pub fn new(label: &'static str, goto: Scene) -> Self {
        Self {
            label,
            conditions: Vec::new(),
            response: Response::None,
            effects: Vec::new(),
            goto,
            pause: false,
        }
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Set a fixed text response.
    pub fn with_response(mut self, text: &'static str) -> Self {
        self.response = Response::Text(text);
        self
    }

    /// Respond with the current inventory listing.
    pub fn with_inventory_listing(mut self) -> Self {
        self.response = Response::Inventory;
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Wait for acknowledgment after the response.
    pub fn with_pause(mut self) -> Self {
        self.pause = true;
        self
    }

    /// Whether all conditions hold for this player.
    pub fn is_available(&self, player: &PlayerState) -> bool {
        self.conditions.iter().all(|c| c.evaluate(player))
    }
}
