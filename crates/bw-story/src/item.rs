//! The items hidden around the mansion.

use std::fmt;

/// An item the player can carry.
///
/// The item set is fixed, so items are a closed enum rather than free
/// strings; display names are what the player sees in inventory listings
/// and narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// The glowing book from the library, containing the banishment ritual.
    AncientBook,
    /// A blessed bottle found in the kitchen cabinet; banishes the ghost.
    HolyWater,
    /// Dropped by the ghost; unlocks the ritual chamber door.
    SilverKey,
    /// An old weapon from the basement rack.
    RustySword,
    /// A glowing red potion from the basement crate; restores health.
    HealthPotion,
    /// A rusted key hanging in the attic.
    BasementKey,
}

impl Item {
    /// The display name shown to the player.
    pub fn name(&self) -> &'static str {
        match self {
            Item::AncientBook => "Ancient Book",
            Item::HolyWater => "Holy Water",
            Item::SilverKey => "Silver Key",
            Item::RustySword => "Rusty Sword",
            Item::HealthPotion => "Health Potion",
            Item::BasementKey => "Basement Key",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
