//! Session state machine driving a run from introduction to ending.
//!
//! `StorySession` replaces the call-chain style of dialogue games with an
//! explicit loop contract: render [`StorySession::prompt`], feed the
//! player's selection to [`StorySession::advance`], repeat until
//! [`StorySession::is_over`]. The only state carried between scenes is the
//! player state and the current scene tag.

use crate::choice::{Choice, Effect, Response};
use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};
use crate::narrative;
use crate::player::PlayerState;
use crate::scene::{Ending, Scene};

/// Everything a frontend needs to render the current scene.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Header text for the scene.
    pub title: &'static str,
    /// Entry narrative, already specialized to the player's state.
    pub narrative: String,
    /// Labels of the available choices, in menu order. Empty when the
    /// scene advances on its own (introduction, the unarmed ghost attack).
    pub choices: Vec<&'static str>,
}

/// A player's input for one step of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// A 1-based selection from the displayed menu.
    Choice(usize),
    /// Acknowledgment for a scene with no menu.
    Continue,
}

/// The result of advancing the session by one step.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Response text to show, with damage/heal notes and a status line
    /// appended when health changed. May be empty.
    pub response: String,
    /// The scene the session moved to.
    pub scene: Scene,
    /// Whether the frontend should wait for acknowledgment before
    /// rendering the next scene.
    pub pause: bool,
}

/// A single run through the mansion.
pub struct StorySession {
    config: StoryConfig,
    player: PlayerState,
    scene: Scene,
}

impl StorySession {
    /// Start a new session at the introduction.
    pub fn new(config: StoryConfig) -> Self {
        Self::at_scene(config, Scene::Introduction)
    }

    /// Start a session at a specific scene, with a fresh player.
    pub fn at_scene(config: StoryConfig, scene: Scene) -> Self {
        let player = PlayerState::new(config.max_health);
        Self {
            config,
            player,
            scene,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The current scene.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Whether the session reached an ending.
    pub fn is_over(&self) -> bool {
        self.scene.is_terminal()
    }

    /// The current scene's choices that pass their condition gates,
    /// in menu order.
    pub fn available_choices(&self) -> Vec<Choice> {
        self.scene
            .menu()
            .into_iter()
            .filter(|c| c.is_available(&self.player))
            .collect()
    }

    /// Render the current scene for the frontend.
    pub fn prompt(&self) -> Prompt {
        Prompt {
            title: self.scene.title(),
            narrative: narrative::entry_text(self.scene, &self.player),
            choices: self
                .available_choices()
                .into_iter()
                .map(|c| c.label)
                .collect(),
        }
    }

    /// Advance the session by one step.
    ///
    /// Scenes with an empty filtered menu take `Continue` and resolve
    /// through their fallthrough choice; every other scene requires a
    /// 1-based `Choice` within the displayed range. If the applied effects
    /// leave the player dead, the destination is overridden to the Defeat
    /// ending and the pause flag is cleared.
    pub fn advance(&mut self, input: PlayerInput) -> StoryResult<Turn> {
        if self.scene.is_terminal() {
            return Err(StoryError::SessionEnded);
        }

        let available = self.available_choices();
        let chosen = if available.is_empty() {
            match input {
                PlayerInput::Continue => {
                    self.scene.fallthrough().ok_or(StoryError::ChoiceRequired)?
                }
                PlayerInput::Choice(n) => {
                    return Err(StoryError::InvalidChoice { choice: n, max: 0 });
                }
            }
        } else {
            match input {
                PlayerInput::Choice(n) if (1..=available.len()).contains(&n) => {
                    available[n - 1].clone()
                }
                PlayerInput::Choice(n) => {
                    return Err(StoryError::InvalidChoice {
                        choice: n,
                        max: available.len(),
                    });
                }
                PlayerInput::Continue => return Err(StoryError::ChoiceRequired),
            }
        };

        let mut lines: Vec<String> = Vec::new();
        match chosen.response {
            Response::Text(text) => lines.push(text.to_string()),
            Response::Inventory => lines.push(narrative::inventory_listing(&self.player)),
            Response::None => {}
        }

        let mut health_changed = false;
        for effect in &chosen.effects {
            match *effect {
                Effect::GiveItem(item) => self.player.add_item(item),
                Effect::TakeItem(item) => {
                    self.player.remove_item(item);
                }
                Effect::Damage(base) => {
                    let amount = self.config.scale_damage(base);
                    self.player.take_damage(amount);
                    lines.push(narrative::damage_note(amount));
                    health_changed = true;
                }
                Effect::Heal(amount) => {
                    self.player.heal(amount);
                    lines.push(narrative::heal_note(amount));
                    health_changed = true;
                }
                Effect::SetKnowledge(key) => self.player.set_knowledge(key, true),
            }
        }
        if health_changed {
            lines.push(narrative::status_line(&self.player));
        }

        let (scene, pause) = if self.player.is_alive() {
            (chosen.goto, chosen.pause)
        } else {
            // Death cuts straight to the bad ending, with no pause before
            // the banner.
            (Scene::Ending(Ending::Defeat), false)
        };
        self.scene = scene;

        Ok(Turn {
            response: lines.join("\n"),
            scene,
            pause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn session_at(scene: Scene) -> StorySession {
        StorySession::at_scene(StoryConfig::default(), scene)
    }

    #[test]
    fn introduction_flows_into_entrance_hall() {
        let mut session = StorySession::new(StoryConfig::default());
        assert_eq!(session.scene(), Scene::Introduction);
        assert!(session.prompt().choices.is_empty());

        let turn = session.advance(PlayerInput::Continue).unwrap();
        assert_eq!(turn.scene, Scene::EntranceHall);
        assert!(turn.pause);
        assert!(turn.response.is_empty());
    }

    #[test]
    fn taking_the_book_updates_inventory() {
        let mut session = session_at(Scene::Library);
        let turn = session.advance(PlayerInput::Choice(1)).unwrap();

        assert_eq!(turn.scene, Scene::Library);
        assert!(session.player().has_item(Item::AncientBook));
        assert_eq!(session.player().inventory(), &[Item::AncientBook]);
        assert!(turn.response.contains("Ancient Book"));
    }

    #[test]
    fn unarmed_ghost_encounter_costs_25_health() {
        let mut session = session_at(Scene::Kitchen);
        let turn = session.advance(PlayerInput::Choice(2)).unwrap();
        assert_eq!(turn.scene, Scene::GhostEncounter);

        let turn = session.advance(PlayerInput::Continue).unwrap();
        assert_eq!(session.player().health(), 75);
        assert_eq!(turn.scene, Scene::EntranceHall);
        assert!(turn.response.contains("(-25 HP)"));
        assert!(turn.response.contains("[Health: 75/100]"));
    }

    #[test]
    fn unarmed_ghost_encounter_can_kill() {
        let config = StoryConfig::default().with_max_health(20);
        let mut session = StorySession::at_scene(config, Scene::GhostEncounter);

        let turn = session.advance(PlayerInput::Continue).unwrap();
        assert_eq!(turn.scene, Scene::Ending(Ending::Defeat));
        assert!(!turn.pause);
        assert!(session.is_over());
    }

    #[test]
    fn holy_water_banishes_the_ghost() {
        let mut session = session_at(Scene::GhostEncounter);
        session.player_mut().add_item(Item::HolyWater);

        let turn = session.advance(PlayerInput::Choice(1)).unwrap();
        assert!(!session.player().has_item(Item::HolyWater));
        assert!(session.player().has_item(Item::SilverKey));
        assert_eq!(turn.scene, Scene::Kitchen);
    }

    #[test]
    fn fleeing_the_ghost_costs_15_health() {
        let mut session = session_at(Scene::GhostEncounter);
        session.player_mut().add_item(Item::HolyWater);

        let turn = session.advance(PlayerInput::Choice(2)).unwrap();
        assert_eq!(session.player().health(), 85);
        assert_eq!(turn.scene, Scene::EntranceHall);
        // Fleeing costs health but the Holy Water is kept.
        assert!(session.player().has_item(Item::HolyWater));
    }

    #[test]
    fn fighting_the_ghost_until_death_reaches_defeat() {
        let mut session = session_at(Scene::EntranceHall);
        session.player_mut().add_item(Item::HolyWater);

        // Each loop: kitchen, investigate, fight. 100 -> 70 -> 40 -> 10.
        for expected in [70, 40, 10] {
            session.advance(PlayerInput::Choice(2)).unwrap();
            session.advance(PlayerInput::Choice(1)).unwrap();
            let turn = session.advance(PlayerInput::Choice(3)).unwrap();
            assert_eq!(turn.scene, Scene::EntranceHall);
            assert_eq!(session.player().health(), expected);
        }

        // The fourth swing is fatal.
        session.advance(PlayerInput::Choice(2)).unwrap();
        session.advance(PlayerInput::Choice(1)).unwrap();
        let turn = session.advance(PlayerInput::Choice(3)).unwrap();
        assert_eq!(turn.scene, Scene::Ending(Ending::Defeat));
        assert_eq!(session.player().health(), 0);

        // Terminal: nothing more is accepted, whatever the input.
        assert!(matches!(
            session.advance(PlayerInput::Choice(1)),
            Err(StoryError::SessionEnded)
        ));
        assert!(matches!(
            session.advance(PlayerInput::Continue),
            Err(StoryError::SessionEnded)
        ));
    }

    #[test]
    fn bedroom_unlocks_with_both_items() {
        let mut session = session_at(Scene::Bedroom);
        session.player_mut().add_item(Item::SilverKey);
        session.player_mut().add_item(Item::AncientBook);

        let turn = session.advance(PlayerInput::Choice(1)).unwrap();
        assert_eq!(turn.scene, Scene::RitualChamber);

        let turn = session.advance(PlayerInput::Choice(1)).unwrap();
        assert_eq!(turn.scene, Scene::Ending(Ending::Hero));
        assert!(session.is_over());
    }

    #[test]
    fn ritual_chamber_reaches_every_ending() {
        for (choice, ending) in [
            (1, Ending::Hero),
            (2, Ending::Corrupted),
            (3, Ending::Survivor),
        ] {
            let mut session = session_at(Scene::RitualChamber);
            let turn = session.advance(PlayerInput::Choice(choice)).unwrap();
            assert_eq!(turn.scene, Scene::Ending(ending));
        }
    }

    #[test]
    fn inventory_choice_lists_items_without_pausing() {
        let mut session = session_at(Scene::EntranceHall);
        session.player_mut().add_item(Item::AncientBook);

        let turn = session.advance(PlayerInput::Choice(4)).unwrap();
        assert_eq!(turn.scene, Scene::EntranceHall);
        assert!(!turn.pause);
        assert!(turn.response.contains("1. Ancient Book"));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut session = session_at(Scene::RitualChamber);
        let err = session.advance(PlayerInput::Choice(4)).unwrap_err();
        assert!(matches!(
            err,
            StoryError::InvalidChoice { choice: 4, max: 3 }
        ));
        // Scene unchanged; a valid retry still works.
        assert_eq!(session.scene(), Scene::RitualChamber);
        assert!(session.advance(PlayerInput::Choice(3)).is_ok());
    }

    #[test]
    fn zero_choice_is_rejected() {
        let mut session = session_at(Scene::EntranceHall);
        assert!(matches!(
            session.advance(PlayerInput::Choice(0)),
            Err(StoryError::InvalidChoice { choice: 0, .. })
        ));
    }

    #[test]
    fn continue_requires_an_empty_menu() {
        let mut session = session_at(Scene::EntranceHall);
        assert!(matches!(
            session.advance(PlayerInput::Continue),
            Err(StoryError::ChoiceRequired)
        ));
    }

    #[test]
    fn potion_heals_50_capped_at_max() {
        let mut session = session_at(Scene::EntranceHall);
        session.player_mut().add_item(Item::HealthPotion);
        session.player_mut().take_damage(30);

        let turn = session.advance(PlayerInput::Choice(7)).unwrap();
        assert_eq!(session.player().health(), 100);
        assert!(!session.player().has_item(Item::HealthPotion));
        assert!(turn.response.contains("(+50 HP)"));
        assert!(turn.response.contains("[Health: 100/100]"));
    }

    #[test]
    fn crate_yields_exactly_one_potion() {
        let mut session = session_at(Scene::Basement);

        // Choice 2 is the crate while the sword is still on the rack.
        let turn = session.advance(PlayerInput::Choice(2)).unwrap();
        assert_eq!(turn.scene, Scene::Basement);
        assert!(session.player().has_item(Item::HealthPotion));

        // The crate is spent even after the potion is drunk.
        session.player_mut().remove_item(Item::HealthPotion);
        let labels: Vec<_> = session
            .available_choices()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert!(!labels.contains(&"Search the crate"));
    }

    #[test]
    fn difficulty_scales_ghost_damage() {
        let config = StoryConfig::for_difficulty(crate::config::Difficulty::Easy);
        let mut session = StorySession::at_scene(config, Scene::GhostEncounter);
        session.player_mut().add_item(Item::HolyWater);

        let turn = session.advance(PlayerInput::Choice(2)).unwrap();
        assert_eq!(session.player().health(), 139);
        assert!(turn.response.contains("(-11 HP)"));
    }

    #[test]
    fn full_walkthrough_to_the_hero_ending() {
        let mut session = StorySession::new(StoryConfig::default());
        let route = [
            PlayerInput::Continue,  // introduction
            PlayerInput::Choice(1), // entrance hall -> library
            PlayerInput::Choice(1), // take the book
            PlayerInput::Choice(1), // back to entrance hall
            PlayerInput::Choice(2), // -> kitchen
            PlayerInput::Choice(1), // search the cabinet
            PlayerInput::Choice(1), // investigate the scratching
            PlayerInput::Choice(1), // use Holy Water -> kitchen
            PlayerInput::Choice(3), // back to entrance hall (cabinet is offered again)
            PlayerInput::Choice(3), // -> bedroom
            PlayerInput::Choice(1), // unlock the glowing door
            PlayerInput::Choice(1), // banish the spirit
        ];
        for input in route {
            session.advance(input).unwrap();
        }
        assert_eq!(session.scene(), Scene::Ending(Ending::Hero));
        assert_eq!(session.player().health(), 100);
        assert!(session.is_over());
    }
}
