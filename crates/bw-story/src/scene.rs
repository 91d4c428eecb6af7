//! Scene and ending enumerations plus their menus.
//!
//! A [`Scene`] is the explicit "where the player is" tag held by the
//! session. Each scene defines its full menu here; the session filters it
//! by the player's state and numbers the survivors. Scenes whose filtered
//! menu comes up empty advance through a fallthrough choice instead.

use crate::choice::{Choice, Condition, Effect};

/// Knowledge flag set once the basement crate has been opened, so it
/// yields exactly one potion per run.
pub(crate) const CRATE_SEARCHED: &str = "searched the crate";

/// Health restored by drinking the Health Potion.
const POTION_HEAL: u32 = 50;

/// How the mansion lets the player go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The spirit is banished and the town is saved.
    Hero,
    /// The spirit is freed and the player joins the darkness.
    Corrupted,
    /// The player flees with the mystery unsolved.
    Survivor,
    /// The player dies in the mansion.
    Defeat,
}

/// A narrative state: one of the mansion's locations, the introduction,
/// or a terminal ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Opening narration before the player gains control.
    Introduction,
    /// The hub connecting every other room.
    EntranceHall,
    /// Shelves of scrolls and one glowing book.
    Library,
    /// A dark kitchen with a cabinet and something scratching.
    Kitchen,
    /// The ghost blocks the way; resolution depends on Holy Water.
    GhostEncounter,
    /// The master bedroom with the sealed glowing door.
    Bedroom,
    /// A damp cellar holding a sword rack and a crate.
    Basement,
    /// A dusty attic with an old journal and a hanging key.
    Attic,
    /// Beyond the glowing door: the bound spirit and the final choice.
    RitualChamber,
    /// A reached ending; the session accepts no further input.
    Ending(Ending),
}

impl Scene {
    /// Whether this scene ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Scene::Ending(_))
    }

    /// Header text for this scene.
    pub fn title(&self) -> &'static str {
        match self {
            Scene::Introduction => "THE HAUNTED MANSION MYSTERY",
            Scene::EntranceHall => "ENTRANCE HALL",
            Scene::Library => "LIBRARY",
            Scene::Kitchen => "KITCHEN",
            Scene::GhostEncounter => "GHOST ENCOUNTER!",
            Scene::Bedroom => "MASTER BEDROOM",
            Scene::Basement => "BASEMENT",
            Scene::Attic => "ATTIC",
            Scene::RitualChamber => "THE RITUAL CHAMBER",
            Scene::Ending(Ending::Hero) => "GOOD ENDING: HERO",
            Scene::Ending(Ending::Corrupted) => "DARK ENDING: CORRUPTED",
            Scene::Ending(Ending::Survivor) => "NEUTRAL ENDING: SURVIVOR",
            Scene::Ending(Ending::Defeat) => "BAD ENDING: DEFEAT",
        }
    }

    /// The scene's full menu, before condition filtering.
    ///
    /// Gated options that can reappear sit after the unconditional ones,
    /// so every option keeps its number in every reachable inventory
    /// state.
    pub fn menu(&self) -> Vec<Choice> {
        use crate::item::Item::*;

        match self {
            Scene::Introduction | Scene::Ending(_) => Vec::new(),

            Scene::EntranceHall => vec![
                Choice::new("Go to the Library (left door)", Scene::Library),
                Choice::new("Go to the Kitchen (right door)", Scene::Kitchen),
                Choice::new("Go upstairs to the Bedroom", Scene::Bedroom),
                Choice::new("Check your inventory", Scene::EntranceHall).with_inventory_listing(),
                Choice::new("Go down to the Basement", Scene::Basement),
                Choice::new("Climb up to the Attic", Scene::Attic),
                Choice::new("Drink the Health Potion", Scene::EntranceHall)
                    .with_condition(Condition::HasItem(HealthPotion))
                    .with_condition(Condition::Injured)
                    .with_response(
                        "You drink the Health Potion. Warmth spreads through your body.",
                    )
                    .with_effect(Effect::TakeItem(HealthPotion))
                    .with_effect(Effect::Heal(POTION_HEAL))
                    .with_pause(),
            ],

            Scene::Library => vec![
                Choice::new("Take the Ancient Book", Scene::Library)
                    .with_condition(Condition::MissingItem(AncientBook))
                    .with_response(
                        "You take the Ancient Book. It feels warm to the touch.\n\
                         You notice strange symbols inside...",
                    )
                    .with_effect(Effect::GiveItem(AncientBook))
                    .with_pause(),
                Choice::new("Read the book here", Scene::Library)
                    .with_condition(Condition::MissingItem(AncientBook))
                    .with_response(
                        "The book contains a ritual to banish evil spirits!\n\
                         You'll need: A Silver Key and Holy Water.",
                    )
                    .with_pause(),
                Choice::new("Return to Entrance Hall", Scene::EntranceHall),
            ],

            Scene::Kitchen => vec![
                Choice::new("Search the cabinet", Scene::Kitchen)
                    .with_condition(Condition::MissingItem(HolyWater))
                    .with_response("You find a bottle of Holy Water!")
                    .with_effect(Effect::GiveItem(HolyWater))
                    .with_pause(),
                Choice::new("Investigate the scratching sound", Scene::GhostEncounter),
                Choice::new("Return to Entrance Hall", Scene::EntranceHall),
            ],

            Scene::GhostEncounter => vec![
                Choice::new("Use Holy Water", Scene::Kitchen)
                    .with_condition(Condition::HasItem(HolyWater))
                    .with_response(
                        "You splash the Holy Water! The ghost shrieks and vanishes!\n\
                         It drops a Silver Key as it disappears!",
                    )
                    .with_effect(Effect::TakeItem(HolyWater))
                    .with_effect(Effect::GiveItem(SilverKey))
                    .with_pause(),
                Choice::new("Run away", Scene::EntranceHall)
                    .with_condition(Condition::HasItem(HolyWater))
                    .with_response(
                        "You run back to the entrance hall!\n\
                         The ghost scratches you as you flee!",
                    )
                    .with_effect(Effect::Damage(15))
                    .with_pause(),
                Choice::new("Try to fight it", Scene::EntranceHall)
                    .with_condition(Condition::HasItem(HolyWater))
                    .with_response("Your fists pass through the ghost! It attacks you!")
                    .with_effect(Effect::Damage(30))
                    .with_pause(),
            ],

            Scene::Bedroom => vec![
                Choice::new("Use the Silver Key on the glowing door", Scene::RitualChamber)
                    .with_condition(Condition::HasItem(SilverKey))
                    .with_condition(Condition::HasItem(AncientBook)),
                Choice::new("Return to Entrance Hall", Scene::EntranceHall),
            ],

            Scene::Basement => vec![
                Choice::new("Take the Rusty Sword", Scene::Basement)
                    .with_condition(Condition::MissingItem(RustySword))
                    .with_response(
                        "You take the rusty sword. It's old but still sharp!\n\
                         You feel more confident with a weapon in hand.",
                    )
                    .with_effect(Effect::GiveItem(RustySword))
                    .with_pause(),
                Choice::new("Search the crate", Scene::Basement)
                    .with_condition(Condition::MissingKnowledge(CRATE_SEARCHED))
                    .with_response(
                        "You pry open the old crate and find a glowing red potion!\n\
                         This could restore your health when you need it most.",
                    )
                    .with_effect(Effect::GiveItem(HealthPotion))
                    .with_effect(Effect::SetKnowledge(CRATE_SEARCHED))
                    .with_pause(),
                Choice::new("Return to Entrance Hall", Scene::EntranceHall),
            ],

            Scene::Attic => vec![
                Choice::new("Take the Basement Key", Scene::Attic)
                    .with_condition(Condition::MissingItem(BasementKey))
                    .with_response("You take the basement key. It's old and covered in rust.")
                    .with_effect(Effect::GiveItem(BasementKey))
                    .with_pause(),
                Choice::new("Return to Entrance Hall", Scene::EntranceHall),
            ],

            Scene::RitualChamber => vec![
                Choice::new(
                    "Perform the banishment ritual (Destroy the spirit)",
                    Scene::Ending(Ending::Hero),
                ),
                Choice::new(
                    "Free the spirit (Accept its offer)",
                    Scene::Ending(Ending::Corrupted),
                ),
                Choice::new(
                    "Run away and escape the mansion",
                    Scene::Ending(Ending::Survivor),
                ),
            ],
        }
    }

    /// The automatic choice taken when the filtered menu is empty.
    pub fn fallthrough(&self) -> Option<Choice> {
        match self {
            Scene::Introduction => {
                Some(Choice::new("Continue", Scene::EntranceHall).with_pause())
            }
            // No Holy Water: the ghost strikes before the player can act.
            Scene::GhostEncounter => Some(
                Choice::new("Continue", Scene::EntranceHall)
                    .with_response("The ghost attacks! You have nothing to defend yourself!")
                    .with_effect(Effect::Damage(25))
                    .with_pause(),
            ),
            _ => None,
        }
    }
}
