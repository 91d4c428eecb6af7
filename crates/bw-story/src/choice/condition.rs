//! Conditions evaluated against player state.

use crate::item::Item;
use crate::player::PlayerState;

/// A condition gating a choice or a narrative variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Condition {
    /// The player holds an item.
    HasItem(Item),
    /// The player does not hold an item.
    MissingItem(Item),
    /// A knowledge flag is set.
    HasKnowledge(&'static str),
    /// A knowledge flag is not set.
    MissingKnowledge(&'static str),
    /// The player is below maximum health.
    Injured,
    /// Always holds.
    #[default]
    Always,
}

impl Condition {
    /// Evaluate the condition against the player's current state.
    pub fn evaluate(&self, player: &PlayerState) -> bool {
        match self {
            Condition::HasItem(item) => player.has_item(*item),
            Condition::MissingItem(item) => !player.has_item(*item),
            Condition::HasKnowledge(key) => player.has_knowledge(key),
            Condition::MissingKnowledge(key) => !player.has_knowledge(key),
            Condition::Injured => player.health() < player.max_health(),
            Condition::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_conditions() {
        let mut player = PlayerState::new(100);

        assert!(!Condition::HasItem(Item::SilverKey).evaluate(&player));
        assert!(Condition::MissingItem(Item::SilverKey).evaluate(&player));

        player.add_item(Item::SilverKey);
        assert!(Condition::HasItem(Item::SilverKey).evaluate(&player));
        assert!(!Condition::MissingItem(Item::SilverKey).evaluate(&player));
    }

    #[test]
    fn knowledge_conditions() {
        let mut player = PlayerState::new(100);

        assert!(!Condition::HasKnowledge("searched the crate").evaluate(&player));
        assert!(Condition::MissingKnowledge("searched the crate").evaluate(&player));

        player.set_knowledge("searched the crate", true);
        assert!(Condition::HasKnowledge("searched the crate").evaluate(&player));
        assert!(!Condition::MissingKnowledge("searched the crate").evaluate(&player));
    }

    #[test]
    fn injured_tracks_health() {
        let mut player = PlayerState::new(100);
        assert!(!Condition::Injured.evaluate(&player));

        player.take_damage(1);
        assert!(Condition::Injured.evaluate(&player));

        player.heal(1);
        assert!(!Condition::Injured.evaluate(&player));
    }

    #[test]
    fn always_holds() {
        let player = PlayerState::new(100);
        assert!(Condition::Always.evaluate(&player));
    }
}
