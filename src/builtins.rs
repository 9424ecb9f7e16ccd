// builtins.rs

use crate::catalog::{
    sorted_projects, Builtin, CommandSpec, Project, COMMANDS, EMAIL, GITHUB_URL, OWNER_LOCATION,
    OWNER_NAME, OWNER_ROLE, PROJECTS,
};
use crate::history::History;

/// What a command produced. Rendering to terminal text happens later, so the
/// transcript keeps these structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Help(&'static [CommandSpec]),
    /// Signal to reset the transcript.
    Clear,
    Text(String),
    Whois {
        name: &'static str,
        role: &'static str,
        location: &'static str,
    },
    Welcome,
    /// Open `target` externally and show `display` as confirmation.
    Launch { target: String, display: String },
    Projects(Vec<Project>),
    History(Vec<String>),
    /// Carries the input exactly as typed, untrimmed.
    NotFound(String),
}

impl Response {
    pub fn launch_target(&self) -> Option<&str> {
        match self {
            Response::Launch { target, .. } => Some(target),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound(_))
    }
}

/// Match `input` against the command table and build its response. `history`
/// is the history as it stood before this line was recorded.
pub fn run_builtin(input: &str, history: &History) -> Response {
    let Some(builtin) = Builtin::parse(input.trim()) else {
        log::debug!("no command matches {input:?}");
        return Response::NotFound(input.to_string());
    };
    log::debug!("dispatching {builtin:?}");
    match builtin {
        Builtin::Help => Response::Help(COMMANDS),
        Builtin::Clear => Response::Clear,
        Builtin::Whoami => Response::Text("Visitor".to_string()),
        Builtin::Whois => Response::Whois {
            name: OWNER_NAME,
            role: OWNER_ROLE,
            location: OWNER_LOCATION,
        },
        Builtin::Welcome => Response::Welcome,
        Builtin::Email => Response::Launch {
            target: format!("mailto:{EMAIL}"),
            display: EMAIL.to_string(),
        },
        Builtin::Github => Response::Launch {
            target: GITHUB_URL.to_string(),
            display: GITHUB_URL.to_string(),
        },
        Builtin::Projects => Response::Projects(sorted_projects(PROJECTS)),
        Builtin::History => Response::History(history.all().to_vec()),
        Builtin::Gui => Response::Text("Sorry the gui website is still under development".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(entries: &[&str]) -> History {
        let mut history = History::new();
        for e in entries {
            history.add(e.to_string());
        }
        history
    }

    #[test]
    fn known_commands_never_fall_through() {
        let history = History::new();
        for spec in COMMANDS {
            let response = run_builtin(spec.identifier, &history);
            assert!(!response.is_not_found(), "{} fell through", spec.identifier);
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let history = History::new();
        assert_eq!(run_builtin("  whoami\t", &history), Response::Text("Visitor".into()));
    }

    #[test]
    fn unknown_input_is_echoed_untrimmed() {
        let history = History::new();
        assert_eq!(
            run_builtin("  ls -la ", &history),
            Response::NotFound("  ls -la ".into())
        );
        assert!(run_builtin("HELP", &history).is_not_found());
        assert!(run_builtin("help me", &history).is_not_found());
    }

    #[test]
    fn email_and_github_launch() {
        let history = History::new();
        let email = run_builtin("email", &history);
        assert_eq!(email.launch_target(), Some("mailto:moukhtar.youssef06@gmail.com"));
        let github = run_builtin("github", &history);
        assert_eq!(github.launch_target(), Some("https://github.com/Moukhtar-youssef"));
        assert_eq!(run_builtin("gui", &history).launch_target(), None);
    }

    #[test]
    fn history_lists_prior_entries() {
        let history = history_of(&["welcome", "whoami", " help"]);
        assert_eq!(
            run_builtin("history", &history),
            Response::History(vec!["welcome".into(), "whoami".into(), " help".into()])
        );
    }

    #[test]
    fn projects_come_out_sorted() {
        let Response::Projects(projects) = run_builtin("projects", &History::new()) else {
            panic!("expected projects");
        };
        let orders: Vec<_> = projects.iter().map(|p| p.display_order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn anything_off_table_is_not_found(s in "\\PC{0,24}") {
                prop_assume!(Builtin::parse(s.trim()).is_none());
                let response = run_builtin(&s, &History::new());
                prop_assert_eq!(response, Response::NotFound(s.clone()));
            }

            #[test]
            fn padded_identifiers_still_match(
                idx in 0..COMMANDS.len(),
                left in "[ \t]{0,4}",
                right in "[ \t]{0,4}",
            ) {
                let input = format!("{left}{}{right}", COMMANDS[idx].identifier);
                prop_assert!(!run_builtin(&input, &History::new()).is_not_found());
            }
        }
    }
}
