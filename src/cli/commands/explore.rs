use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use crate::ui::Prompter;
use std::io;

/// Handle the `explore` command (also the default with no subcommand)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    session::run(&mut prompter, cfg)
}
