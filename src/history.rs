// history.rs

/// Raw submitted lines, oldest first. Append-only.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }
    /// The `back`-th most recent entry, 0 being the latest.
    pub fn nth_back(&self, back: usize) -> Option<&String> {
        self.entries.iter().rev().nth(back)
    }
}

/// What the input buffer should do after a navigation signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    Load(String),
    Clear,
    Unchanged,
}

/// Replay position while walking history with Up/Down.
///
/// `None` is idle. `Some(k)` means the buffer holds the k-th most recent
/// entry, and `k < history.len()` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayPointer(Option<usize>);

impl ReplayPointer {
    pub fn idle() -> Self {
        Self(None)
    }

    pub fn position(&self) -> Option<usize> {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Step one entry further into the past. Saturates at the oldest entry.
    pub fn previous(&mut self, history: &History) -> Recall {
        let next = self.0.map_or(0, |k| k + 1);
        match history.nth_back(next) {
            Some(entry) => {
                self.0 = Some(next);
                Recall::Load(entry.clone())
            }
            None => Recall::Unchanged,
        }
    }

    /// Step one entry towards the present; past the latest entry the buffer
    /// empties and the pointer goes idle.
    pub fn next(&mut self, history: &History) -> Recall {
        match self.0 {
            None | Some(0) => {
                self.0 = None;
                Recall::Clear
            }
            Some(k) => {
                self.0 = Some(k - 1);
                match history.nth_back(k - 1) {
                    Some(entry) => Recall::Load(entry.clone()),
                    None => {
                        self.0 = None;
                        Recall::Clear
                    }
                }
            }
        }
    }
}
