pub mod play;
pub mod script;

use bw_story::{Difficulty, Prompt, Scene, StoryConfig, Turn};
use colored::Colorize;

/// Resolve a difficulty name into a session configuration.
fn config_for(difficulty: &str) -> Result<StoryConfig, String> {
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(StoryConfig::for_difficulty(difficulty))
}

/// Print a scene: header, narrative, and the numbered menu.
///
/// The introduction and the endings get the full-width banner; ordinary
/// rooms get the `=== NAME ===` header.
fn print_prompt(scene: Scene, prompt: &Prompt) {
    println!();
    match scene {
        Scene::Introduction | Scene::Ending(_) => {
            let rule = "=".repeat(40);
            println!("{rule}");
            println!("{}", format!("{:^40}", prompt.title).bold());
            println!("{rule}");
            println!();
        }
        _ => println!("{}", format!("=== {} ===", prompt.title).bold()),
    }
    println!("{}", prompt.narrative);

    if !prompt.choices.is_empty() {
        println!();
        for (i, label) in prompt.choices.iter().enumerate() {
            println!("{}. {label}", i + 1);
        }
    }
}

/// Print the response text of a turn, if any.
fn print_turn(turn: &Turn) {
    if !turn.response.is_empty() {
        println!();
        println!("{}", turn.response);
    }
}
