use crate::bounds::Bound;
use crate::errors::{Error, Result};
use crate::intervals::Interval;
use std::str::FromStr;

/// Parse an interval written in bracket notation, as output by
/// [`std::fmt::Display`]:
///
/// ```text
///     [1,5)   (1,5]   (-∞,5]   [1,+∞)   (,5]   (-inf,inf)   empty   ∅
/// ```
///
/// A missing endpoint is infinite.  The bracket next to an infinite
/// endpoint is ignored.
/// ```
/// use interval_algebra::{Bound, Interval};
/// let intv: Interval<i32> = "[1, +∞)".parse().unwrap();
/// assert_eq!(intv.lower(), Ok(&Bound::Closed(1)));
/// assert_eq!(intv.upper(), Ok(&Bound::PositiveInfinity));
/// ```
impl<T> FromStr for Interval<T>
where
    T: FromStr + Ord,
    T::Err: std::fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text == "empty" || text == "∅" {
            return Ok(Interval::Empty);
        }

        let mut chars = text.chars();
        let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
            return Err(Error::Parse(format!("'{text}' is too short")));
        };
        let (lower, upper) = chars.as_str().split_once(',').ok_or_else(|| {
            Error::Parse(format!("missing ',' in '{text}'"))
        })?;

        let lower = match (open, parse_endpoint::<T>(lower)?) {
            (_, Endpoint::Infinite(bound)) => bound,
            (_, Endpoint::Missing) => Bound::NegativeInfinity,
            ('[', Endpoint::Value(v)) => Bound::Closed(v),
            ('(', Endpoint::Value(v)) => Bound::Open(v),
            (c, Endpoint::Value(_)) => {
                return Err(Error::Parse(format!(
                    "'{text}' must start with '[' or '(', not '{c}'"
                )))
            }
        };
        let upper = match (close, parse_endpoint::<T>(upper)?) {
            (_, Endpoint::Infinite(bound)) => bound,
            (_, Endpoint::Missing) => Bound::PositiveInfinity,
            (']', Endpoint::Value(v)) => Bound::Closed(v),
            (')', Endpoint::Value(v)) => Bound::Open(v),
            (c, Endpoint::Value(_)) => {
                return Err(Error::Parse(format!(
                    "'{text}' must end with ']' or ')', not '{c}'"
                )))
            }
        };

        Interval::from_bounds(lower, upper)
    }
}

enum Endpoint<T> {
    Missing,
    Infinite(Bound<T>),
    Value(T),
}

fn parse_endpoint<T>(text: &str) -> Result<Endpoint<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match text.trim() {
        "" => Ok(Endpoint::Missing),
        "-∞" | "-inf" => Ok(Endpoint::Infinite(Bound::NegativeInfinity)),
        "+∞" | "∞" | "+inf" | "inf" => {
            Ok(Endpoint::Infinite(Bound::PositiveInfinity))
        }
        t => t
            .parse::<T>()
            .map(Endpoint::Value)
            .map_err(|e| Error::Parse(format!("'{t}': {e}"))),
    }
}

#[cfg(test)]
mod test {
    use crate::bounds::Bound;
    use crate::errors::Error;
    use crate::intervals::Interval;
    use rust_decimal_macros::dec;

    fn parse(s: &str) -> Result<Interval<i32>, Error> {
        s.parse()
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("[1,5)"), Interval::closed_open(1, 5));
        assert_eq!(parse("(1,5]"), Interval::open_closed(1, 5));
        assert_eq!(parse(" ( 1 , 5 ) "), Interval::open(1, 5));
        assert_eq!(parse("[-3,-1]"), Interval::closed(-3, -1));
        assert_eq!(parse("empty"), Ok(Interval::Empty));
        assert_eq!(parse("∅"), Ok(Interval::Empty));
        assert_eq!(
            parse("(-∞,5]"),
            Interval::from_bounds(Bound::NegativeInfinity, Bound::Closed(5))
        );
        assert_eq!(
            parse("[1,)"),
            Interval::from_bounds(Bound::Closed(1), Bound::PositiveInfinity)
        );
        assert_eq!(parse("(-inf,inf)"), Ok(Interval::unbounded()));
        assert_eq!(parse("(,)"), Ok(Interval::unbounded()));
        assert_eq!(parse("[-∞,+∞]"), Ok(Interval::unbounded()));

        let intv: Interval<rust_decimal::Decimal> = "[1.5,2.25)".parse().unwrap();
        assert_eq!(intv, Interval::closed_open(dec!(1.5), dec!(2.25)).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::Parse(_))));
        assert!(matches!(parse("["), Err(Error::Parse(_))));
        assert!(matches!(parse("[1 5]"), Err(Error::Parse(_))));
        assert!(matches!(parse("{1,5]"), Err(Error::Parse(_))));
        assert!(matches!(parse("[1,5}"), Err(Error::Parse(_))));
        assert!(matches!(parse("[a,5]"), Err(Error::Parse(_))));

        // Syntactically correct, but not a valid interval
        assert!(matches!(parse("[5,1]"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse("(+∞,1]"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse("[1,-∞)"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["[1,5)", "(1,5]", "(-∞,5]", "[1,+∞)", "(-∞,+∞)", "empty"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }
}
