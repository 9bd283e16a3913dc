use crate::bounds::{Bound, Cut};
use crate::errors::{Error, Result};
use crate::nothing_between::NothingBetween;
use std::ops::{
    Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// The two bounds of a non-empty interval.  They always satisfy
/// `lower <= upper`, with neither a positive-infinite lower bound nor a
/// negative-infinite upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounded<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T> Bounded<T> {
    #[must_use]
    pub fn lower(&self) -> &Bound<T> {
        &self.lower
    }

    #[must_use]
    pub fn upper(&self) -> &Bound<T> {
        &self.upper
    }

    #[must_use]
    pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
        (self.lower, self.upper)
    }
}

impl<T: Ord> Bounded<T> {
    /// The bounds of the intersection, or None if the two sets of values
    /// have nothing in common.
    fn common<'a>(
        &'a self,
        right: &'a Self,
    ) -> Option<(&'a Bound<T>, &'a Bound<T>)> {
        let lower = if self.lower.cmp_lower(&right.lower).is_ge() {
            &self.lower
        } else {
            &right.lower
        };
        let upper = if self.upper.cmp_upper(&right.upper).is_le() {
            &self.upper
        } else {
            &right.upper
        };
        if upper.upper_cut() <= lower.lower_cut() {
            None
        } else {
            Some((lower, upper))
        }
    }

    /// The bounds of the smallest interval containing both.
    fn hull<'a>(&'a self, right: &'a Self) -> (&'a Bound<T>, &'a Bound<T>) {
        let lower = if self.lower.cmp_lower(&right.lower).is_le() {
            &self.lower
        } else {
            &right.lower
        };
        let upper = if self.upper.cmp_upper(&right.upper).is_ge() {
            &self.upper
        } else {
            &right.upper
        };
        (lower, upper)
    }

    /// Whether one of the intervals ends right where the other one starts,
    /// with no value in between.  `nothing_between` is only called for two
    /// closed bounds with different values.
    fn meets<F>(&self, right: &Self, nothing_between: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let ends_at = |upper: &Bound<T>, lower: &Bound<T>| {
            let (u, l) = (upper.upper_cut(), lower.lower_cut());
            if u.is_finite() && u == l {
                return true;
            }
            match (upper, lower) {
                (Bound::Closed(u), Bound::Closed(l)) => {
                    u < l && nothing_between(u, l)
                }
                (
                    Bound::NegativeInfinity
                    | Bound::Open(_)
                    | Bound::Closed(_)
                    | Bound::PositiveInfinity,
                    Bound::NegativeInfinity
                    | Bound::Open(_)
                    | Bound::Closed(_)
                    | Bound::PositiveInfinity,
                ) => false,
            }
        };
        self.common(right).is_none()
            && (ends_at(&self.upper, &right.lower)
                || ends_at(&right.upper, &self.lower))
    }
}

/// An interval of values, possibly empty.
///
/// ```text
///   Bounded   (A,B)  [A,B]  (A,B]  [A,B)  (-∞,B]  [A,+∞)  (-∞,+∞) ...
///   Empty     no value at all
/// ```
///
/// Intervals are immutable values.  Equality is structural: `(1,5)` and
/// `[1,5]` are different intervals, and all empty intervals are equal.  No
/// normalization is done, so `(3,3)` is a valid bounded interval (which
/// happens to contain no value) and is not equal to [`Interval::Empty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interval<T> {
    Empty,
    Bounded(Bounded<T>),
}

impl<T> Interval<T> {
    /// Returns the empty interval
    #[must_use]
    pub const fn empty() -> Self {
        Interval::Empty
    }

    /// Construct a doubly unbounded interval (`(-∞,+∞)`) that contains all
    /// possible values.
    #[must_use]
    pub const fn unbounded() -> Self {
        Interval::Bounded(Bounded {
            lower: Bound::NegativeInfinity,
            upper: Bound::PositiveInfinity,
        })
    }

    /// True for the empty interval only.  A bounded interval like `(3,3)`
    /// is not considered empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Interval::Empty)
    }

    /// The lower bound.  Fails for the empty interval, which has no bounds.
    pub fn lower(&self) -> Result<&Bound<T>> {
        self.bounds().map(|(lower, _)| lower).ok_or_else(|| {
            Error::InvalidState("empty interval has no lower bound".into())
        })
    }

    /// The upper bound.  Fails for the empty interval, which has no bounds.
    pub fn upper(&self) -> Result<&Bound<T>> {
        self.bounds().map(|(_, upper)| upper).ok_or_else(|| {
            Error::InvalidState("empty interval has no upper bound".into())
        })
    }

    /// Both bounds, unless the interval is empty
    #[must_use]
    pub fn bounds(&self) -> Option<(&Bound<T>, &Bound<T>)> {
        self.as_bounded().map(|b| (&b.lower, &b.upper))
    }

    #[must_use]
    pub fn as_bounded(&self) -> Option<&Bounded<T>> {
        match self {
            Interval::Empty => None,
            Interval::Bounded(b) => Some(b),
        }
    }

    /// Converts from `Interval<T>` to `Interval<&T>`
    #[must_use]
    pub fn as_ref(&self) -> Interval<&T> {
        match self {
            Interval::Empty => Interval::Empty,
            Interval::Bounded(b) => Interval::Bounded(Bounded {
                lower: b.lower.as_ref(),
                upper: b.upper.as_ref(),
            }),
        }
    }
}

impl<T> Default for Interval<T> {
    /// Returns an empty interval
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> Interval<T> {
    /// Construct an interval from its two bounds.
    /// Fails if the lower bound is positive infinity, the upper bound is
    /// negative infinity, or the lower value is greater than the upper
    /// value.  Equal values are accepted whatever the openness, so `(3,3)`
    /// is valid.
    pub fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Result<Self> {
        check_bounds(&lower, &upper).inspect_err(|e| log::trace!("{e}"))?;
        Ok(Interval::Bounded(Bounded { lower, upper }))
    }

    /// Construct a left-open, right-open interval (`(A,B)`)
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::from_bounds(Bound::Open(lower), Bound::Open(upper))
    }

    /// Construct a left-closed, right-closed interval (`[A,B]`)
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::from_bounds(Bound::Closed(lower), Bound::Closed(upper))
    }

    /// Construct a left-open, right-closed interval (`(A,B]`)
    pub fn open_closed(lower: T, upper: T) -> Result<Self> {
        Self::from_bounds(Bound::Open(lower), Bound::Closed(upper))
    }

    /// Construct a left-closed, right-open interval (`[A,B)`)
    pub fn closed_open(lower: T, upper: T) -> Result<Self> {
        Self::from_bounds(Bound::Closed(lower), Bound::Open(upper))
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Interval::Empty => false,
            Interval::Bounded(b) => {
                b.lower.lower_cut() <= Cut::LeftOf(value)
                    && Cut::RightOf(value) <= b.upper.upper_cut()
            }
        }
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).  Everything contains the empty interval.
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Interval::Empty) => true,
            (Interval::Empty, Interval::Bounded(_)) => false,
            (Interval::Bounded(s), Interval::Bounded(o)) => {
                s.lower.cmp_lower(&o.lower).is_le()
                    && o.upper.cmp_upper(&s.upper).is_le()
            }
        }
    }

    /// Whether the two intervals are disjoint, but with no gap between them.
    /// This is the case when one ends with an open bound and the other
    /// starts with a closed bound at the same value (or the reverse):
    ///
    /// ```text
    ///    [1, 2)           [1, 2]        [1, 2)          [1, 2]
    ///          [2, 3]           [2, 3]        (2, 3]          [3, 4]
    ///    adjacent         overlapping   gap at 2        gap (2,3)
    /// ```
    ///
    /// The empty interval is not adjacent to anything.  See also
    /// [`Interval::touches()`] for discrete types.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Interval::Bounded(s), Interval::Bounded(o)) => {
                s.meets(o, |_, _| false)
            }
            (Interval::Empty, _) | (_, Interval::Empty) => false,
        }
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Returns an interval that contains a single value (`[value,value]`)
    #[must_use]
    pub fn single(value: T) -> Self {
        Interval::Bounded(Bounded {
            lower: Bound::Closed(value.clone()),
            upper: Bound::Closed(value),
        })
    }

    /// Returns the intersection of the two intervals.  This is the same as
    /// the [`&`] operator.
    ///
    /// The lower bound is the greatest of the two lower bounds and the upper
    /// bound the smallest of the two upper bounds, where an open bound is
    /// stricter than a closed bound with the same value.  The result is
    /// empty when those bounds leave no value, e.g. `(1,5] & [5,6]` is
    /// `[5,5]` but `(1,5) & [5,6]` is empty.
    #[must_use]
    pub fn intersection(&self, right: &Self) -> Self {
        match (self, right) {
            (Interval::Bounded(s), Interval::Bounded(r)) => {
                s.common(r).map_or(Interval::Empty, |(lower, upper)| {
                    Interval::Bounded(Bounded {
                        lower: lower.clone(),
                        upper: upper.clone(),
                    })
                })
            }
            (Interval::Empty, _) | (_, Interval::Empty) => Interval::Empty,
        }
    }

    /// Returns the union of the two intervals.  This is the same as the
    /// [`|`] operator.
    ///
    /// The union is only representable when the intervals overlap or are
    /// adjacent.  When there is a gap between them, the union cannot be
    /// represented as a single interval, and the empty interval is
    /// returned.  The empty interval is the identity.
    #[must_use]
    pub fn union(&self, right: &Self) -> Self {
        self.join(right, |_, _| false)
    }

    /// Returns the smallest interval that contains the values of both
    /// intervals.  Unlike [`Interval::union()`] this never fails, but the
    /// result might contain values from neither interval.
    #[must_use]
    pub fn convex_hull(&self, right: &Self) -> Self {
        match (self, right) {
            (Interval::Empty, _) => right.clone(),
            (_, Interval::Empty) => self.clone(),
            (Interval::Bounded(s), Interval::Bounded(r)) => {
                let (lower, upper) = s.hull(r);
                Interval::Bounded(Bounded {
                    lower: lower.clone(),
                    upper: upper.clone(),
                })
            }
        }
    }

    fn join<F>(&self, right: &Self, nothing_between: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        match (self, right) {
            (Interval::Empty, _) => right.clone(),
            (_, Interval::Empty) => self.clone(),
            (Interval::Bounded(s), Interval::Bounded(r)) => {
                if s.common(r).is_some() || s.meets(r, nothing_between) {
                    self.convex_hull(right)
                } else {
                    log::debug!(
                        "union of disjoint intervals cannot be represented"
                    );
                    Interval::Empty
                }
            }
        }
    }
}

impl<T: Ord + NothingBetween> Interval<T> {
    /// Whether the two intervals are disjoint and no value lies between
    /// them.  For discrete types, `[1,2]` and `[3,4]` touch although they
    /// are not adjacent.  For continuous types, this is the same as
    /// [`Interval::is_adjacent_to()`].
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        match (self, other) {
            (Interval::Bounded(s), Interval::Bounded(o)) => {
                s.meets(o, T::nothing_between)
            }
            (Interval::Empty, _) | (_, Interval::Empty) => false,
        }
    }
}

impl<T: Ord + NothingBetween + Clone> Interval<T> {
    /// Same as [`Interval::union()`], but also merges intervals that
    /// [`Interval::touches()`].
    /// ```
    /// use interval_algebra::Interval;
    /// let left = Interval::closed(1, 2).unwrap();
    /// let right = Interval::closed(3, 4).unwrap();
    /// assert!(left.union(&right).is_empty());
    /// assert_eq!(left.merge(&right), Interval::closed(1, 4).unwrap());
    /// ```
    #[must_use]
    pub fn merge(&self, right: &Self) -> Self {
        self.join(right, T::nothing_between)
    }
}

fn check_bounds<T: Ord>(lower: &Bound<T>, upper: &Bound<T>) -> Result<()> {
    if lower.is_positive_infinity() {
        return Err(Error::InvalidArgument(
            "lower bound cannot be positive infinity".into(),
        ));
    }
    if upper.is_negative_infinity() {
        return Err(Error::InvalidArgument(
            "upper bound cannot be negative infinity".into(),
        ));
    }
    if let (Some(l), Some(u)) = (lower.try_value(), upper.try_value()) {
        if l > u {
            return Err(Error::InvalidArgument(
                "lower bound must not be greater than upper bound".into(),
            ));
        }
    }
    Ok(())
}

///  &Interval & &Interval
impl<T: Ord + Clone> std::ops::BitAnd<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: &Interval<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  Interval & Interval
impl<T: Ord + Clone> std::ops::BitAnd<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Interval<T>) -> Self::Output {
        self.intersection(&rhs)
    }
}

///  &Interval | &Interval
impl<T: Ord + Clone> std::ops::BitOr<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: &Interval<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  Interval | Interval
impl<T: Ord + Clone> std::ops::BitOr<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: Interval<T>) -> Self::Output {
        self.union(&rhs)
    }
}

/// `a..b` is `[a,b)`
impl<T: Ord> TryFrom<Range<T>> for Interval<T> {
    type Error = Error;

    fn try_from(value: Range<T>) -> Result<Self> {
        Interval::closed_open(value.start, value.end)
    }
}

/// `a..=b` is `[a,b]`
impl<T: Ord> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = Error;

    fn try_from(value: RangeInclusive<T>) -> Result<Self> {
        let (lower, upper) = value.into_inner();
        Interval::closed(lower, upper)
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Interval::Bounded(Bounded {
            lower: Bound::Closed(value.start),
            upper: Bound::PositiveInfinity,
        })
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self {
        Interval::Bounded(Bounded {
            lower: Bound::NegativeInfinity,
            upper: Bound::Open(value.end),
        })
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(value: RangeToInclusive<T>) -> Self {
        Interval::Bounded(Bounded {
            lower: Bound::NegativeInfinity,
            upper: Bound::Closed(value.end),
        })
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Interval::unbounded()
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Interval::Empty => write!(f, "empty")?,
            Interval::Bounded(b) => {
                match &b.lower {
                    Bound::NegativeInfinity => write!(f, "(-∞")?,
                    Bound::Open(p) => write!(f, "({}", p)?,
                    Bound::Closed(p) => write!(f, "[{}", p)?,
                    Bound::PositiveInfinity => write!(f, "(+∞")?,
                }
                match &b.upper {
                    Bound::NegativeInfinity => write!(f, ",-∞)")?,
                    Bound::Open(p) => write!(f, ",{})", p)?,
                    Bound::Closed(p) => write!(f, ",{}]", p)?,
                    Bound::PositiveInfinity => write!(f, ",+∞)")?,
                }
            }
        }
        Ok(())
    }
}
