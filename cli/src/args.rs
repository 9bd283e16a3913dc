use crate::commands::Operation;
use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

pub(crate) fn build_cli() -> Command {
    let mut cmd = Command::new("intv")
        .version("0.1")
        .about("Intersection, union and adjacency of intervals")
        .long_about(
            "Intervals are written in bracket notation, like '[1,5)', \
             '(-∞,5]', '[2024-01-01,)' or 'empty'.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli());

    for op in Operation::ALL {
        cmd = cmd.subcommand(
            Command::new(op.name()).about(op.about()).args(op.operands()),
        );
    }

    cmd.subcommand(
        // Use    eval "$(intv completions zsh)"
        Command::new("completions")
            .about("Generate shell completions")
            .arg(
                Arg::new("shell")
                    .value_name("SHELL")
                    .help("The shell to generate the completions for")
                    .required(true)
                    .value_parser(clap::builder::EnumValueParser::<
                        clap_complete_command::Shell,
                    >::new()),
            ),
    )
}

/// The two positional operands of a binary operation
pub(crate) fn operands(right_is_value: bool) -> [Arg; 2] {
    let right = if right_is_value {
        arg!(<VALUE> "A value, e.g. '3'")
    } else {
        arg!(<RIGHT> "Second interval, e.g. '(4,7]'")
    };
    [
        arg!(<LEFT> "First interval, e.g. '[1,5)'"),
        right.allow_hyphen_values(true),
    ]
}
