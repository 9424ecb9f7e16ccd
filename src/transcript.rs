// transcript.rs

use crate::builtins::Response;
use crate::catalog::PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    /// The prompt line as displayed, e.g. `visitor@...:~$ whoami`.
    pub prompted: String,
    pub response: Response,
}

/// Prompt/response pairs currently on screen.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: &str, response: Response) -> &Entry {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            prompted: format!("{PROMPT}{input}"),
            response,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Drops every entry. Ids keep counting so none is ever reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
