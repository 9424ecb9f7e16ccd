// catalog.rs
//
// Everything the portfolio knows about: the command table, the project list,
// and the profile details the commands print.

use itertools::Itertools;

pub const PROMPT: &str = "visitor@terminal.Moukhtar.dev:~$ ";
pub const VERSION: &str = "1.0.0";

pub const OWNER_NAME: &str = "Moukhtar youssef";
pub const OWNER_ROLE: &str = "full-stack developer";
pub const OWNER_LOCATION: &str = "Szeged,Hungary";
pub const EMAIL: &str = "moukhtar.youssef06@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Moukhtar-youssef";
pub const SOURCE_REPO_URL: &str = "https://github.com/Moukhtar-youssef/terminal_portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub identifier: &'static str,
    pub description: &'static str,
}

/// Order matters: `help` lists in this order and completion takes the first hit.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { identifier: "help", description: "You obviously already know what this does" },
    CommandSpec { identifier: "clear", description: "Clear the terminal" },
    CommandSpec { identifier: "whoami", description: "About current user" },
    CommandSpec { identifier: "whois", description: "Who is Moukhtar" },
    CommandSpec {
        identifier: "welcome",
        description: "Show the welcome message (don't worry you can always find it in the command history)",
    },
    CommandSpec { identifier: "email", description: "Send me an email" },
    CommandSpec { identifier: "github", description: "Show my github" },
    CommandSpec { identifier: "projects", description: "Show what I have codded" },
    CommandSpec { identifier: "history", description: "View command history" },
    CommandSpec { identifier: "gui", description: "Go to my portfolio in GUI" },
];

/// The closed set of commands, one variant per row of [`COMMANDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Clear,
    Whoami,
    Whois,
    Welcome,
    Email,
    Github,
    Projects,
    History,
    Gui,
}

impl Builtin {
    pub fn parse(identifier: &str) -> Option<Self> {
        let builtin = match identifier {
            "help" => Builtin::Help,
            "clear" => Builtin::Clear,
            "whoami" => Builtin::Whoami,
            "whois" => Builtin::Whois,
            "welcome" => Builtin::Welcome,
            "email" => Builtin::Email,
            "github" => Builtin::Github,
            "projects" => Builtin::Projects,
            "history" => Builtin::History,
            "gui" => Builtin::Gui,
            _ => return None,
        };
        Some(builtin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub source_url: &'static str,
    pub preview_url: Option<&'static str>,
    pub display_order: u32,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Terminal_Portfolio",
        description: "A terminal design website acting as a portfolio",
        source_url: "https://github.com/Moukhtar-youssef/terminal_portfolio",
        preview_url: Some("https://terminal-portfolio-one-tau.vercel.app/"),
        display_order: 2,
    },
    Project {
        name: "Task_Manager_CLI",
        description: "A modern CLI-based task management application built in Go, using the Cobra framework. \
                      Task_Tracker lets you quickly manage your to-do list from the terminal \u{2014} add, edit, \
                      delete, and update tasks with ease.",
        source_url: "https://github.com/Moukhtar-youssef/Task_Manager_CLI",
        preview_url: None,
        display_order: 1,
    },
    Project {
        name: "Expense_Tracker_CLI",
        description: "A powerful and minimal command-line tool to track your expenses, budgets, and summaries \
                      right from the terminal.",
        source_url: "https://github.com/Moukhtar-youssef/Expense-Tracker/tree/main",
        preview_url: None,
        display_order: 3,
    },
];

/// Projects in display order. The sort is stable, so equal orders keep their
/// declaration order.
pub fn sorted_projects(projects: &[Project]) -> Vec<Project> {
    projects.iter().cloned().sorted_by_key(|p| p.display_order).collect()
}

pub const WELCOME_BANNER: &[&str] = &[
    r"        __  ___            __   __    __                __  __                           ____",
    r"       /  |/  /___  __  __/ /__/ /_  / /_____ ______    \ \/ /___  __  _______________  / __/",
    r"      / /|_/ / __ \/ / / / //_/ __ \/ __/ __ `/ ___/     \  / __ \/ / / / ___/ ___/ _ \/ /_  ",
    r"     / /  / / /_/ / /_/ / ,< / / / / /_/ /_/ / /         / / /_/ / /_/ (__  |__  )  __/ __/  ",
    r"    /_/  /_/\____/\__,_/_/|_/_/ /_/\__/\__,_/_/         /_/\____/\__,_/____/____/\___/_/     ",
    r"                                                                                              ",
];

pub const WELCOME_BANNER_COMPACT: &[&str] = &[
    r"    __  ___            __   __    __               ",
    r"   /  |/  /___  __  __/ /__/ /_  / /_____ ______ ",
    r"  / /|_/ / __ \/ / / / //_/ __ \/ __/ __ `/ ___/",
    r" / /  / / /_/ / /_/ / ,< / / / / /_/ /_/ / / ",
    r"/_/  /_/\____/\__,_/_/|_/_/ /_/\__/\__,_/_/",
];

/// Widest line of the full banner; terminals narrower than this get the
/// compact one.
pub fn banner_width() -> usize {
    WELCOME_BANNER.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}
