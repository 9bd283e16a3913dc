use clap::{Arg, ArgMatches, ValueEnum, arg, value_parser};

/// The type of the values in the intervals
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Integers (discrete)
    Int,

    /// Decimal numbers (continuous)
    Decimal,

    /// Dates, as YYYY-MM-DD (discrete)
    Date,
}

pub struct GlobalSettings {
    pub kind: Kind,

    // Number of -v switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--kind <KIND> "Type of the values in the intervals")
                .value_parser(value_parser!(Kind))
                .default_value("int")
                .global(true),
            arg!(-v --verbose ... "Show more logs (-vv for even more)")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            kind: args.get_one::<Kind>("kind").copied().unwrap_or(Kind::Int),
            verbosity: args.get_count("verbose"),
        }
    }

    /// Setup logging.  RUST_LOG still takes precedence.
    pub fn init_logger(&self) {
        let level = match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level),
        )
        .init();
    }
}
