// render.rs

use crate::builtins::Response;
use crate::catalog::{Project, SOURCE_REPO_URL, VERSION, WELCOME_BANNER, WELCOME_BANNER_COMPACT};
use itertools::Itertools;

/// Width of the identifier column in `help`.
const HELP_COLUMN: usize = 12;

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Ansi,
    Plain,
}

impl Style {
    fn bold(self, text: &str) -> String {
        match self {
            Style::Ansi => format!("\x1b[1m{text}\x1b[0m"),
            Style::Plain => text.to_string(),
        }
    }

    /// OSC 8 hyperlink, with the URL spelled out for terminals that ignore it.
    fn link(self, label: &str, url: &str) -> String {
        match self {
            Style::Ansi => format!("\x1b]8;;{url}\x1b\\\x1b[4m{label}\x1b[0m\x1b]8;;\x1b\\ ({url})"),
            Style::Plain => format!("{label} ({url})"),
        }
    }
}

/// Turns responses into terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub style: Style,
    pub compact: bool,
}

impl Renderer {
    pub fn new(style: Style, compact: bool) -> Self {
        Self { style, compact }
    }

    pub fn render(&self, response: &Response) -> String {
        match response {
            Response::Help(commands) => commands
                .iter()
                .map(|c| format!("{:<width$}- {}", c.identifier, c.description, width = HELP_COLUMN))
                .join("\n"),
            Response::Clear => String::new(),
            Response::Text(text) => text.clone(),
            Response::Whois { name, role, location } => format!(
                "Hi, My name is {}!\nI am a {role} based in {location}",
                self.style.bold(name)
            ),
            Response::Welcome => self.welcome(),
            Response::Launch { display, .. } => display.clone(),
            Response::Projects(projects) => projects.iter().map(|p| self.project(p)).join("\n\n"),
            Response::History(entries) => entries.join("\n"),
            Response::NotFound(input) => format!("command not found: {input}"),
        }
    }

    fn welcome(&self) -> String {
        let banner = if self.compact { WELCOME_BANNER_COMPACT } else { WELCOME_BANNER };
        format!(
            "{}\n\nWelcome to my terminal portfolio. (Version {VERSION})\n\n\
             This project's source code can be found in this project's {}\n\n\
             For a list of available commands, type `{}`.",
            banner.join("\n"),
            self.style.link("GitHub repo", SOURCE_REPO_URL),
            self.style.bold("help"),
        )
    }

    fn project(&self, project: &Project) -> String {
        let mut links = self.style.link("GitHub Repo", project.source_url);
        if let Some(preview) = project.preview_url {
            links.push_str(" | ");
            links.push_str(&self.style.link("Live Preview", preview));
        }
        format!(
            "{}\n{}\n{links}",
            self.style.bold(project.name),
            project.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sorted_projects, COMMANDS, PROJECTS};

    fn plain() -> Renderer {
        Renderer::new(Style::Plain, false)
    }

    #[test]
    fn help_lists_table_in_order() {
        let text = plain().render(&Response::Help(COMMANDS));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), COMMANDS.len());
        assert_eq!(lines[0], "help        - You obviously already know what this does");
        assert!(lines[9].starts_with("gui         - "));
    }

    #[test]
    fn not_found_echoes_input() {
        let text = plain().render(&Response::NotFound("  foo ".into()));
        assert_eq!(text, "command not found:   foo ");
    }

    #[test]
    fn whois_plain() {
        let text = plain().render(&Response::Whois {
            name: "Moukhtar youssef",
            role: "full-stack developer",
            location: "Szeged,Hungary",
        });
        assert_eq!(
            text,
            "Hi, My name is Moukhtar youssef!\nI am a full-stack developer based in Szeged,Hungary"
        );
    }

    #[test]
    fn whois_ansi_bolds_name() {
        let text = Renderer::new(Style::Ansi, false).render(&Response::Whois {
            name: "Moukhtar youssef",
            role: "full-stack developer",
            location: "Szeged,Hungary",
        });
        assert!(text.contains("\x1b[1mMoukhtar youssef\x1b[0m"));
    }

    #[test]
    fn projects_render_in_given_order_with_optional_preview() {
        let text = plain().render(&Response::Projects(sorted_projects(PROJECTS)));
        let task = text.find("Task_Manager_CLI").unwrap();
        let term = text.find("Terminal_Portfolio").unwrap();
        let expense = text.find("Expense_Tracker_CLI").unwrap();
        assert!(task < term && term < expense);
        assert_eq!(text.matches("Live Preview").count(), 1);
        assert_eq!(text.matches("GitHub Repo").count(), 3);
        assert!(text.contains(
            "GitHub Repo (https://github.com/Moukhtar-youssef/terminal_portfolio) | \
             Live Preview (https://terminal-portfolio-one-tau.vercel.app/)"
        ));
    }

    #[test]
    fn welcome_picks_banner() {
        let wide = plain().render(&Response::Welcome);
        let narrow = Renderer::new(Style::Plain, true).render(&Response::Welcome);
        assert!(wide.starts_with(WELCOME_BANNER[0]));
        assert!(narrow.starts_with(WELCOME_BANNER_COMPACT[0]));
        for text in [&wide, &narrow] {
            assert!(text.contains("Welcome to my terminal portfolio. (Version 1.0.0)"));
            assert!(text.contains("type `help`"));
            assert!(text.contains("\n\nWelcome to my terminal portfolio."));
        }
        assert!(wide.contains(
            "GitHub repo (https://github.com/Moukhtar-youssef/terminal_portfolio)\n\nFor a list"
        ));
    }

    #[test]
    fn history_one_per_line() {
        let text = plain().render(&Response::History(vec!["welcome".into(), " help".into()]));
        assert_eq!(text, "welcome\n help");
    }

    #[test]
    fn launch_shows_display_text() {
        let text = plain().render(&Response::Launch {
            target: "mailto:moukhtar.youssef06@gmail.com".into(),
            display: "moukhtar.youssef06@gmail.com".into(),
        });
        assert_eq!(text, "moukhtar.youssef06@gmail.com");
    }
}
