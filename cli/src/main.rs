mod args;
mod commands;
mod global_settings;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::Result;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);
    settings.init_logger();

    match matches.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell
                    .clone()
                    .generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some((name, sub)) => {
            println!("{}", commands::run(name, sub, settings.kind)?);
        }
        None => {}
    }

    Ok(())
}
