use crate::global_settings::Kind;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::{Arg, ArgMatches};
use interval_algebra::{Interval, NothingBetween};
use itertools::Itertools;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

/// The operations available as subcommands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Intersect,
    Union,
    Adjacent,
    Touches,
    Merge,
    Hull,
    Contains,
    Summary,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Intersect,
        Operation::Union,
        Operation::Adjacent,
        Operation::Touches,
        Operation::Merge,
        Operation::Hull,
        Operation::Contains,
        Operation::Summary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Intersect => "intersect",
            Operation::Union => "union",
            Operation::Adjacent => "adjacent",
            Operation::Touches => "touches",
            Operation::Merge => "merge",
            Operation::Hull => "hull",
            Operation::Contains => "contains",
            Operation::Summary => "summary",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Operation::Intersect => "Values in both intervals",
            Operation::Union => {
                "Values in either interval (empty if there is a gap)"
            }
            Operation::Adjacent => {
                "Whether the intervals touch at a single bound, open on one \
                 side and closed on the other"
            }
            Operation::Touches => {
                "Whether no value lies between the intervals (e.g. [1,2] \
                 and [3,4] for integers)"
            }
            Operation::Merge => "Union, also joining touching intervals",
            Operation::Hull => "Smallest interval containing both",
            Operation::Contains => "Whether the value is in the interval",
            Operation::Summary => "Show the result of all operations",
        }
    }

    pub fn operands(&self) -> [Arg; 2] {
        crate::args::operands(matches!(self, Operation::Contains))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

/// Execute the subcommand `name`, and return the text to display
pub fn run(name: &str, args: &ArgMatches, kind: Kind) -> Result<String> {
    let op = Operation::from_name(name)
        .ok_or_else(|| anyhow!("Unknown command {name}"))?;
    let right_id = match op {
        Operation::Contains => "VALUE",
        Operation::Intersect
        | Operation::Union
        | Operation::Adjacent
        | Operation::Touches
        | Operation::Merge
        | Operation::Hull
        | Operation::Summary => "RIGHT",
    };
    let operand = |id: &str| {
        args.get_one::<String>(id)
            .ok_or_else(|| anyhow!("Missing argument {id}"))
    };
    let (left, right) = (operand("LEFT")?, operand(right_id)?);

    match kind {
        Kind::Int => evaluate::<i64>(op, left, right),
        Kind::Decimal => evaluate::<Decimal>(op, left, right),
        Kind::Date => evaluate::<NaiveDate>(op, left, right),
    }
}

fn evaluate<T>(op: Operation, left: &str, right: &str) -> Result<String>
where
    T: FromStr + Ord + Clone + Display + NothingBetween,
    T::Err: Display,
{
    let left: Interval<T> = left.parse()?;
    let interval = |text: &str| text.parse::<Interval<T>>();
    log::debug!("{} {left} {right}", op.name());

    Ok(match op {
        Operation::Intersect => (&left & &interval(right)?).to_string(),
        Operation::Union => (&left | &interval(right)?).to_string(),
        Operation::Adjacent => {
            left.is_adjacent_to(&interval(right)?).to_string()
        }
        Operation::Touches => left.touches(&interval(right)?).to_string(),
        Operation::Merge => left.merge(&interval(right)?).to_string(),
        Operation::Hull => left.convex_hull(&interval(right)?).to_string(),
        Operation::Contains => {
            let value = right
                .trim()
                .parse::<T>()
                .map_err(|e| anyhow!("'{right}': {e}"))?;
            left.contains(&value).to_string()
        }
        Operation::Summary => summary(&left, &interval(right)?),
    })
}

fn summary<T>(left: &Interval<T>, right: &Interval<T>) -> String
where
    T: Ord + Clone + Display + NothingBetween,
{
    [
        (Operation::Intersect, (left & right).to_string()),
        (Operation::Union, (left | right).to_string()),
        (Operation::Adjacent, left.is_adjacent_to(right).to_string()),
        (Operation::Touches, left.touches(right).to_string()),
        (Operation::Merge, left.merge(right).to_string()),
        (Operation::Hull, left.convex_hull(right).to_string()),
    ]
    .iter()
    .map(|(op, value)| format!("{:<10} {}", op.name(), value))
    .join("\n")
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::commands::{Operation, run};
    use crate::global_settings::GlobalSettings;

    fn exec(args: &[&str]) -> anyhow::Result<String> {
        let m = build_cli()
            .try_get_matches_from(std::iter::once("intv").chain(args.iter().copied()))?;
        let settings = GlobalSettings::new(&m);
        let (name, sub) = m.subcommand().unwrap();
        run(name, sub, settings.kind)
    }

    #[test]
    fn test_names() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("completions"), None);
    }

    #[test]
    fn test_int() {
        assert_eq!(exec(&["intersect", "[1,5]", "(4,7)"]).unwrap(), "(4,5]");
        assert_eq!(exec(&["union", "[1,4]", "[4,6]"]).unwrap(), "[1,6]");
        assert_eq!(exec(&["union", "(1,4)", "(4,6)"]).unwrap(), "empty");
        assert_eq!(exec(&["adjacent", "[1,2)", "[2,3]"]).unwrap(), "true");
        assert_eq!(exec(&["adjacent", "[1,2]", "[3,4]"]).unwrap(), "false");
        assert_eq!(exec(&["touches", "[1,2]", "[3,4]"]).unwrap(), "true");
        assert_eq!(exec(&["merge", "[1,2]", "[3,4]"]).unwrap(), "[1,4]");
        assert_eq!(exec(&["hull", "[1,2]", "(5,)"]).unwrap(), "[1,+∞)");
        assert_eq!(exec(&["contains", "[-5,2]", "-5"]).unwrap(), "true");
        assert_eq!(exec(&["contains", "(-5,2]", "-5"]).unwrap(), "false");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            exec(&["--kind", "decimal", "touches", "[1,2]", "[3,4]"]).unwrap(),
            "false"
        );
        assert_eq!(
            exec(&["--kind", "decimal", "intersect", "[1.5,2.5]", "(2,3)"])
                .unwrap(),
            "(2,2.5]"
        );
        assert_eq!(
            exec(&[
                "--kind",
                "date",
                "merge",
                "[2024-01-01,2024-01-31]",
                "[2024-02-01,2024-02-29]",
            ])
            .unwrap(),
            "[2024-01-01,2024-02-29]"
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            exec(&["summary", "[1,2]", "[3,4]"]).unwrap(),
            "intersect  empty\n\
             union      empty\n\
             adjacent   false\n\
             touches    true\n\
             merge      [1,4]\n\
             hull       [1,4]"
        );
    }

    #[test]
    fn test_errors() {
        assert!(exec(&["union", "[5,1]", "[1,2]"]).is_err());
        assert!(exec(&["union", "[1,2]", "[a,b]"]).is_err());
        assert!(exec(&["contains", "[1,2]", "x"]).is_err());
        assert!(exec(&["--kind", "date", "union", "[1,2]", "[3,4]"]).is_err());
    }
}
