//! Interactive shell: the terminal presentation layer over a navigator.
//!
//! Reads one command per line, dispatches it to the navigator, and re-renders
//! the view. Reader and writer are generic so tests drive it with byte buffers.

mod command;
mod render;

use std::io::{self, BufRead, Write};

use decision_tree::{DecisionTreeNavigator, NavigationError, NodeLookup};

pub use command::{Command, ParseCommandError};
pub use render::{render, HELP};

/// Runs the shell until `q` or end of input.
///
/// Navigator errors are reported as lines of output and never end the loop. A
/// missing target node returns the user to the start node.
pub fn run_shell<G, R, W>(
    navigator: &mut DecisionTreeNavigator<G>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    G: NodeLookup,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    render(navigator, out)?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "{}. Type h for help.", e)?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if command == Command::Help {
            writeln!(out, "{}", HELP)?;
            continue;
        }
        execute(navigator, command, out)?;
        render(navigator, out)?;
    }
    Ok(())
}

/// Applies one navigation command, writing any failure as a message.
pub fn execute<G: NodeLookup, W: Write>(
    navigator: &mut DecisionTreeNavigator<G>,
    command: Command,
    out: &mut W,
) -> io::Result<()> {
    let result = match command {
        Command::Choose(n) => {
            let target = n
                .checked_sub(1)
                .and_then(|i| navigator.current_node().option(i))
                .map(|o| o.target.clone());
            match target {
                Some(target) => navigator.navigate_or_reset(&target),
                None if navigator.current_node().is_terminal() => {
                    writeln!(out, "No options here. Press r to start over.")?;
                    return Ok(());
                }
                None => {
                    writeln!(out, "No option {}.", n)?;
                    return Ok(());
                }
            }
        }
        Command::Back => navigator.back(),
        Command::Jump(index) => match navigator.breadcrumbs().find(index).cloned() {
            Some(crumb) => navigator.jump_to(&crumb.node_id, crumb.history_index),
            None => {
                writeln!(out, "No breadcrumb [{}] on screen.", index)?;
                return Ok(());
            }
        },
        Command::Reset => {
            navigator.reset();
            Ok(())
        }
        Command::Help | Command::Quit => Ok(()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(NavigationError::AtStart) => writeln!(out, "Already at the start."),
        Err(e) if e.is_data_integrity() => {
            writeln!(out, "error: {}. Returned to the start.", e)
        }
        Err(e) => writeln!(out, "{}", e),
    }
}
