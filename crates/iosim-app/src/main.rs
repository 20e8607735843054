//! iosim interactive entry point.
//!
//! Reads lines with rustyline (Tab completes commands and interface names),
//! dispatches them against one session, and prints output or IOS-style
//! errors. `exit`/`quit` in an EXEC mode or end of input in any mode ends
//! the program.

mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use iosim_terminal::{CommandOutput, Session, dispatch, render_error};
use iosim_types::config::{CONFIG_ENV_VAR, SimConfig};
use shell::ShellHelper;

type LineEditor = Editor<ShellHelper, DefaultHistory>;

const BANNER: &str = "iosim: IOS-style CLI simulator. Press Tab to complete, ? for help.";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = load_settings()?;
    let show_banner = settings.banner;
    let session = Session::new(settings).context("invalid startup configuration")?;

    let mut rl: LineEditor = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new(session)));

    if show_banner {
        println!("{BANNER}");
    }

    loop {
        let prompt = session_mut(&mut rl)?.prompt();
        let input = rl.readline(&prompt);
        if let Ok(line) = &input {
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
        }
        if handle_input(session_mut(&mut rl)?, input)? == Flow::Stop {
            break;
        }
    }

    log::info!("session ended");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Act on one read from the line editor. End of input ends the session in
/// every mode.
fn handle_input(session: &mut Session, input: rustyline::Result<String>) -> Result<Flow> {
    match input {
        Ok(line) if run_line(session, &line) => Ok(Flow::Stop),
        Ok(_) => Ok(Flow::Continue),
        Err(ReadlineError::Interrupted) => {
            println!("^C");
            Ok(Flow::Continue)
        },
        Err(ReadlineError::Eof) => {
            log::debug!("end of input in {} mode", session.mode());
            Ok(Flow::Stop)
        },
        Err(err) => Err(err.into()),
    }
}

/// Config file from the first CLI argument, else `IOSIM_CONFIG`, else defaults.
fn load_settings() -> Result<SimConfig> {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR))
        .map(PathBuf::from);
    match path {
        Some(path) => SimConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

fn session_mut(rl: &mut LineEditor) -> Result<&mut Session> {
    rl.helper_mut()
        .map(|h| &mut h.session)
        .context("line editor has no helper")
}

/// Dispatch one line and print the result. Returns `true` when the session
/// has ended.
fn run_line(session: &mut Session, line: &str) -> bool {
    match dispatch(session, line) {
        Ok(CommandOutput::Text(text)) => println!("{text}"),
        Ok(CommandOutput::None) => {},
        Ok(CommandOutput::Exit) => return true,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            println!("{}", render_error(line, &e));
        },
    }
    false
}
