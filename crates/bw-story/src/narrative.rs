//! Narrative text for scenes, endings, and status display.
//!
//! Pure text building: every function takes the state it needs and returns
//! a string, so the session and frontends stay free of prose.

use crate::player::PlayerState;
use crate::scene::{CRATE_SEARCHED, Ending, Scene};

use crate::item::Item::*;

/// The `[Health: H/M]` status line.
pub fn status_line(player: &PlayerState) -> String {
    format!("[Health: {}/{}]", player.health(), player.max_health())
}

/// A damage note shown when the player loses health.
pub(crate) fn damage_note(amount: u32) -> String {
    format!("(-{amount} HP)")
}

/// A heal note shown when the player recovers health.
pub(crate) fn heal_note(amount: u32) -> String {
    format!("(+{amount} HP)")
}

/// The player's inventory, one numbered line per item.
pub fn inventory_listing(player: &PlayerState) -> String {
    if player.inventory().is_empty() {
        return "Your inventory is empty.".to_string();
    }

    let mut out = String::from("Your inventory:");
    for (i, item) in player.inventory().iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, item));
    }
    out
}

/// Entry narrative for a scene, varying with the player's state.
pub fn entry_text(scene: Scene, player: &PlayerState) -> String {
    match scene {
        Scene::Introduction => "You are a detective investigating mysterious disappearances\n\
             in the old Blackwood Mansion. As you approach the mansion,\n\
             a sudden storm forces you inside. The door slams shut behind you...\n\n\
             Your goal: Uncover the mansion's secrets and escape alive!"
            .to_string(),

        Scene::EntranceHall => "You find yourself in a dusty entrance hall. Moonlight filters\n\
             through broken windows. Doors and passages lead off in every direction."
            .to_string(),

        Scene::Library => {
            if player.has_item(AncientBook) {
                "The library is quiet. Nothing else of interest here.".to_string()
            } else {
                "The library is filled with ancient books and scrolls.\n\
                 You notice a peculiar book glowing on the shelf."
                    .to_string()
            }
        }

        Scene::Kitchen => "The kitchen is dark and smells of decay.\n\
             You see a cabinet and hear scratching sounds..."
            .to_string(),

        Scene::GhostEncounter => "A terrifying ghost appears from the shadows!\n\
             It lunges at you!"
            .to_string(),

        Scene::Bedroom => {
            let mut out = String::from(
                "You enter a lavish but decayed bedroom.\n\
                 There's a locked door at the far end - it glows with an eerie light.",
            );
            if player.has_item(SilverKey) && player.has_item(AncientBook) {
                out.push_str("\nYou have both the Silver Key and the Ancient Book!");
            } else {
                out.push_str("\nThe door is locked with a mystical seal.");
                if !player.has_item(SilverKey) {
                    out.push_str("\nYou need a Silver Key to unlock it.");
                }
                if !player.has_item(AncientBook) {
                    out.push_str("\nYou sense you need more knowledge to proceed...");
                }
            }
            out
        }

        Scene::Basement => {
            let mut out = String::from(
                "You descend creaky wooden stairs into a damp, dark basement.\n\
                 The smell of mold fills your nostrils.",
            );
            let sword_taken = player.has_item(RustySword);
            let crate_searched = player.has_knowledge(CRATE_SEARCHED);
            if !sword_taken {
                out.push_str("\nIn the corner you spot an old weapon rack holding a rusty sword.");
            }
            if !crate_searched {
                out.push_str("\nA dusty crate sits against the wall.");
            }
            if sword_taken && crate_searched {
                out.push_str("\nThe basement is empty now. Nothing else of value remains.");
            }
            out
        }

        Scene::Attic => {
            let mut out = String::from(
                "You climb up to the dusty attic. Cobwebs hang everywhere.\n\
                 Old furniture and forgotten memories fill this space.",
            );
            if player.has_item(BasementKey) {
                out.push_str(
                    "\nThe journal sits on the desk, but you've already read it.\n\
                     Nothing else here seems useful.",
                );
            } else {
                out.push_str(
                    "\nAn old journal lies open on a desk. It reads:\n\
                     \"The darkness came from below... the basement holds secrets...\"\n\
                     A small key hangs on the wall beside it.",
                );
            }
            out
        }

        Scene::RitualChamber => "The door opens to reveal a dark ritual chamber.\n\
             In the center, a dark spirit is bound in chains of light.\n\
             It speaks: 'Free me, and I shall grant you power beyond imagination...'\n\
             You remember the banishment ritual from the Ancient Book."
            .to_string(),

        Scene::Ending(ending) => ending_text(ending).to_string(),
    }
}

fn ending_text(ending: Ending) -> &'static str {
    match ending {
        Ending::Hero => "You recite the ancient words from the book.\n\
             Light fills the chamber as the dark spirit screams!\n\
             The mansion begins to crumble around you...\n\n\
             You run outside just as the mansion collapses.\n\
             The town is safe, and the disappearances will stop.\n\
             You are hailed as a hero!\n\n\
             THE END - You saved the town!",

        Ending::Corrupted => "You break the chains binding the spirit.\n\
             Dark energy flows into you - power beyond imagination!\n\
             But at what cost...?\n\n\
             Your reflection in the mirror shows only darkness.\n\
             You have become the new master of the mansion.\n\
             The disappearances will continue...\n\n\
             THE END - You joined the darkness",

        Ending::Survivor => "You decide this is beyond your abilities.\n\
             You flee the mansion and never look back.\n\n\
             You survive, but the mansion still stands.\n\
             The mystery remains unsolved...\n\
             Others may not be so lucky.\n\n\
             THE END - You escaped with your life",

        Ending::Defeat => "You were defeated by the ghost...\n\n\
             You have fallen in the Haunted Mansion.\n\
             Your story ends here...\n\n\
             GAME OVER",
    }
}
