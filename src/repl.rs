// repl.rs

use crate::catalog::PROMPT;
use crate::completion::PortfolioHelper;
use crate::config::Settings;
use crate::error::{PortfolioError, Result};
use crate::history::Recall;
use crate::launcher::{DisabledLauncher, Launcher, SystemLauncher};
use crate::render::{Renderer, CLEAR_SCREEN};
use crate::session::{Outcome, Session};
use crate::util::write_block;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, Movement, RepeatCount,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

/// Up/Down go through the session's replay pointer instead of the editor's
/// own history.
struct RecallHandler {
    session: Arc<Mutex<Session>>,
    direction: Direction,
}

impl ConditionalEventHandler for RecallHandler {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, _ctx: &EventContext) -> Option<Cmd> {
        let Ok(mut session) = self.session.lock() else {
            return Some(Cmd::Noop);
        };
        let recall = match self.direction {
            Direction::Previous => session.history_previous(),
            Direction::Next => session.history_next(),
        };
        Some(recall_command(recall))
    }
}

fn recall_command(recall: Recall) -> Cmd {
    match recall {
        Recall::Load(entry) => Cmd::Replace(Movement::WholeLine, Some(entry)),
        Recall::Clear => Cmd::Replace(Movement::WholeLine, Some(String::new())),
        Recall::Unchanged => Cmd::Noop,
    }
}

fn bind_recall(rl: &mut Editor<PortfolioHelper, DefaultHistory>, session: &Arc<Mutex<Session>>) {
    for (code, direction) in [(KeyCode::Up, Direction::Previous), (KeyCode::Down, Direction::Next)] {
        let handler = RecallHandler {
            session: Arc::clone(session),
            direction,
        };
        rl.bind_sequence(
            KeyEvent(code, Modifiers::NONE),
            EventHandler::Conditional(Box::new(handler)),
        );
    }
}

pub fn start_repl(settings: &Settings) -> Result<()> {
    let renderer = Renderer::new(settings.style, settings.compact_banner);
    let launcher: Box<dyn Launcher> = if settings.launch {
        Box::new(SystemLauncher)
    } else {
        Box::new(DisabledLauncher)
    };
    let session = Arc::new(Mutex::new(Session::new()));

    let mut rl: Editor<PortfolioHelper, DefaultHistory> = Editor::with_config(settings.editor_config())?;
    rl.set_helper(Some(PortfolioHelper::new(settings.style)));
    bind_recall(&mut rl, &session);

    {
        let session = session.lock().map_err(|_| PortfolioError::Poisoned)?;
        let mut stdout = io::stdout();
        for entry in session.transcript().entries() {
            writeln!(stdout, "{}", entry.prompted)?;
            write_block(&mut stdout, renderer.render(&entry.response))?;
        }
    }
    log::info!("session started");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let mut session = session.lock().map_err(|_| PortfolioError::Poisoned)?;
                match session.submit(&line, launcher.as_ref()) {
                    Outcome::Appended(entry) => {
                        log::debug!("appended entry {:?}", entry.id);
                        write_block(io::stdout(), renderer.render(&entry.response))?;
                    }
                    Outcome::Cleared => {
                        let mut stdout = io::stdout();
                        write!(stdout, "{CLEAR_SCREEN}")?;
                        stdout.flush()?;
                    }
                    Outcome::Ignored => {}
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    if let Ok(session) = session.lock() {
        log::info!("session ended after {} commands", session.history().len());
    }
    Ok(())
}
