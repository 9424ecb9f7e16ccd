// completion.rs

use crate::catalog::COMMANDS;
use crate::render::Style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// First identifier, in table order, that starts with the whole `buffer`.
pub fn autocomplete(buffer: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|c| c.identifier)
        .find(|id| id.starts_with(buffer))
}

/// Line-editor helper: Tab completion against the command table and a dimmed
/// inline hint of what Tab would produce.
pub struct PortfolioHelper {
    style: Style,
}

impl PortfolioHelper {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Completer for PortfolioHelper {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        // The whole buffer is the prefix; with the cursor mid-line there is
        // nothing sensible to replace.
        if pos != line.len() {
            return Ok((pos, Vec::new()));
        }
        let completions = autocomplete(line)
            .map(|id| Pair {
                display: id.to_string(),
                replacement: id.to_string(),
            })
            .into_iter()
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for PortfolioHelper {
    type Hint = String;
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos != line.len() {
            return None;
        }
        autocomplete(line)
            .filter(|id| *id != line)
            .map(|id| id[line.len()..].to_string())
    }
}

impl Highlighter for PortfolioHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        match self.style {
            Style::Ansi => Cow::Owned(format!("\x1b[2m{hint}\x1b[0m")),
            Style::Plain => Cow::Borrowed(hint),
        }
    }
}

impl Validator for PortfolioHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for PortfolioHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    #[test]
    fn first_match_wins() {
        assert_eq!(autocomplete("h"), Some("help"));
        assert_eq!(autocomplete("hi"), Some("history"));
        assert_eq!(autocomplete("w"), Some("whoami"));
        assert_eq!(autocomplete("whoi"), Some("whois"));
        assert_eq!(autocomplete("g"), Some("github"));
        assert_eq!(autocomplete("gu"), Some("gui"));
    }

    #[test]
    fn no_match_leaves_buffer() {
        assert_eq!(autocomplete("z"), None);
        assert_eq!(autocomplete("H"), None);
        assert_eq!(autocomplete("help "), None);
    }

    #[test]
    fn empty_buffer_completes_to_first_command() {
        assert_eq!(autocomplete(""), Some("help"));
    }

    #[test]
    fn exact_identifier_completes_to_itself() {
        assert_eq!(autocomplete("projects"), Some("projects"));
    }

    #[test]
    fn helper_replaces_whole_line() {
        let helper = PortfolioHelper::new(Style::Plain);
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete("pro", 3, &ctx).unwrap();
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "projects");

        let (_, none) = helper.complete("nope", 4, &ctx).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn completed_identifier_stays_put() {
        let helper = PortfolioHelper::new(Style::Plain);
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete("projects", 8, &ctx).unwrap();
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "projects");
    }

    #[test]
    fn hint_shows_remainder() {
        let helper = PortfolioHelper::new(Style::Plain);
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("proj", 4, &ctx), Some("ects".to_string()));
        assert_eq!(helper.hint("help", 4, &ctx), None);
        assert_eq!(helper.hint("", 0, &ctx), None);
        assert_eq!(helper.hint("proj", 2, &ctx), None);
    }
}
