// session.rs
//
// One visitor's state: history, replay pointer and the visible transcript.

use crate::builtins::{run_builtin, Response};
use crate::history::{History, Recall, ReplayPointer};
use crate::launcher::Launcher;
use crate::transcript::{Entry, Transcript};

/// What a submission did to the transcript.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Blank input; nothing recorded.
    Ignored,
    /// `clear` ran; the transcript is now empty.
    Cleared,
    Appended(&'a Entry),
}

#[cfg(test)]
impl<'a> Outcome<'a> {
    pub fn entry(&self) -> Option<&'a Entry> {
        match self {
            Outcome::Appended(entry) => Some(*entry),
            _ => None,
        }
    }
}

pub struct Session {
    history: History,
    pointer: ReplayPointer,
    transcript: Transcript,
}

impl Session {
    /// A fresh session, already showing the welcome block.
    pub fn new() -> Self {
        let mut history = History::new();
        history.add("welcome".to_string());
        let mut transcript = Transcript::new();
        transcript.push("welcome", Response::Welcome);
        Self {
            history,
            pointer: ReplayPointer::idle(),
            transcript,
        }
    }

    /// Run one submitted line: record it, open any external target, and put
    /// the response on the transcript.
    pub fn submit(&mut self, input: &str, launcher: &dyn Launcher) -> Outcome<'_> {
        if input.trim().is_empty() {
            return Outcome::Ignored;
        }
        let response = run_builtin(input, &self.history);
        self.history.add(input.to_string());
        self.pointer.reset();

        if let Some(target) = response.launch_target() {
            if let Err(err) = launcher.open(target) {
                log::warn!("{err}");
            }
        }

        if response == Response::Clear {
            log::debug!("transcript cleared ({} entries)", self.transcript.len());
            self.transcript.clear();
            return Outcome::Cleared;
        }
        Outcome::Appended(self.transcript.push(input, response))
    }

    pub fn history_previous(&mut self) -> Recall {
        let recall = self.pointer.previous(&self.history);
        log::debug!("history previous -> {:?}", self.pointer.position());
        recall
    }

    pub fn history_next(&mut self) -> Recall {
        let recall = self.pointer.next(&self.history);
        log::debug!("history next -> {:?}", self.pointer.position());
        recall
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn pointer(&self) -> ReplayPointer {
        self.pointer
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
