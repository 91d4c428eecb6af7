use bw_story::{PlayerInput, StorySession};

use super::{config_for, print_prompt, print_turn};

/// Replay a fixed sequence of menu choices without prompting.
///
/// The full transcript is printed as in play mode, minus the pauses.
/// Choices left over once an ending is reached are ignored, but running
/// out of choices before the story ends is an error.
pub fn run(choices: &[usize], difficulty: &str) -> Result<(), String> {
    let config = config_for(difficulty)?;
    let mut session = StorySession::new(config);
    let mut feed = choices.iter().copied();

    loop {
        let prompt = session.prompt();
        print_prompt(session.scene(), &prompt);
        if session.is_over() {
            break;
        }

        let input = if prompt.choices.is_empty() {
            PlayerInput::Continue
        } else {
            let n = feed
                .next()
                .ok_or_else(|| "choice script ran out before the story ended".to_string())?;
            println!("\nYour choice: {n}");
            PlayerInput::Choice(n)
        };

        let turn = session.advance(input).map_err(|e| e.to_string())?;
        print_turn(&turn);
    }

    Ok(())
}
