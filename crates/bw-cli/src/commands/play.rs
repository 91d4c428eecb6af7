use std::io::{self, BufRead, Write};

use colored::Colorize;

use bw_story::{PlayerInput, StorySession};

use super::{config_for, print_prompt, print_turn};

/// Run an interactive session against stdin/stdout.
pub fn run(difficulty: &str) -> Result<(), String> {
    let config = config_for(difficulty)?;
    let mut session = StorySession::new(config);

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let prompt = session.prompt();
        print_prompt(session.scene(), &prompt);
        if session.is_over() {
            break;
        }

        let input = if prompt.choices.is_empty() {
            PlayerInput::Continue
        } else {
            PlayerInput::Choice(read_choice(&mut reader, prompt.choices.len())?)
        };

        let turn = session.advance(input).map_err(|e| e.to_string())?;
        print_turn(&turn);
        if turn.pause {
            wait_for_enter(&mut reader)?;
        }
    }

    Ok(())
}

/// Read a menu selection in `1..=max`, re-prompting until one arrives.
///
/// Closing the input stream is an error, not an infinite loop.
fn read_choice(reader: &mut impl BufRead, max: usize) -> Result<usize, String> {
    let mut line = String::new();
    loop {
        print!("\nYour choice: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Err("input stream closed before the story ended".into()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => println!(
                "{}",
                format!("Invalid choice. Please enter a number between 1 and {max}.").yellow()
            ),
        }
    }
}

fn wait_for_enter(reader: &mut impl BufRead) -> Result<(), String> {
    print!("\nPress Enter to continue...");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err("input stream closed before the story ended".into()),
        Err(e) => Err(e.to_string()),
        Ok(_) => Ok(()),
    }
}
