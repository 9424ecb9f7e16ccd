mod builtins;
mod catalog;
mod completion;
mod config;
mod error;
mod history;
mod launcher;
mod render;
mod repl;
mod session;
mod transcript;
mod util;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = config::Settings::from_env().context("reading settings from the environment")?;
    log::debug!("settings: {settings:?}");
    repl::start_repl(&settings).context("terminal session failed")?;
    Ok(())
}
