use crate::errors::{Error, Result};
use std::cmp::{Ordering, PartialOrd};

/// The classification of a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundType {
    Open,
    Closed,
    NegativeInfinite,
    PositiveInfinite,
}

/// One end of an interval.
///
/// A finite bound always carries a value, an infinite one never does.  The
/// same bound can be used on either side of an interval; its meaning
/// (whether values on its left or on its right are part of the interval)
/// depends on that side.
///
/// ```text
///     Open(3)    as lower:  (3, ...      excludes 3
///     Closed(3)  as lower:  [3, ...      includes 3
///     Open(3)    as upper:  ..., 3)      excludes 3
///     Closed(3)  as upper:  ..., 3]      includes 3
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    NegativeInfinity,
    Open(T),
    Closed(T),
    PositiveInfinity,
}

impl<T> Bound<T> {
    #[must_use]
    pub fn bound_type(&self) -> BoundType {
        match self {
            Bound::NegativeInfinity => BoundType::NegativeInfinite,
            Bound::Open(_) => BoundType::Open,
            Bound::Closed(_) => BoundType::Closed,
            Bound::PositiveInfinity => BoundType::PositiveInfinite,
        }
    }

    /// The value of a finite bound.  Infinite bounds have no value, and
    /// callers are expected to check [`Bound::is_finite()`] first.
    pub fn value(&self) -> Result<&T> {
        self.try_value().ok_or_else(|| {
            Error::InvalidState(format!(
                "{:?} bound has no value",
                self.bound_type()
            ))
        })
    }

    /// The value of a finite bound, None for infinite bounds.
    #[must_use]
    pub fn try_value(&self) -> Option<&T> {
        match self {
            Bound::Open(v) | Bound::Closed(v) => Some(v),
            Bound::NegativeInfinity | Bound::PositiveInfinity => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Bound::Open(_))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Bound::Closed(_))
    }

    #[must_use]
    pub fn is_negative_infinity(&self) -> bool {
        matches!(self, Bound::NegativeInfinity)
    }

    #[must_use]
    pub fn is_positive_infinity(&self) -> bool {
        matches!(self, Bound::PositiveInfinity)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Bound::Open(_) | Bound::Closed(_))
    }

    /// Converts from `Bound<T>` to `Bound<&T>`
    #[must_use]
    pub fn as_ref(&self) -> Bound<&T> {
        match self {
            Bound::NegativeInfinity => Bound::NegativeInfinity,
            Bound::Open(v) => Bound::Open(v),
            Bound::Closed(v) => Bound::Closed(v),
            Bound::PositiveInfinity => Bound::PositiveInfinity,
        }
    }

    /// Where the bound cuts the line of values, when used as a lower bound.
    pub(crate) fn lower_cut(&self) -> Cut<'_, T> {
        match self {
            Bound::NegativeInfinity => Cut::Below,
            Bound::Open(v) => Cut::RightOf(v),
            Bound::Closed(v) => Cut::LeftOf(v),
            Bound::PositiveInfinity => Cut::Above,
        }
    }

    /// Where the bound cuts the line of values, when used as an upper bound.
    pub(crate) fn upper_cut(&self) -> Cut<'_, T> {
        match self {
            Bound::NegativeInfinity => Cut::Below,
            Bound::Open(v) => Cut::LeftOf(v),
            Bound::Closed(v) => Cut::RightOf(v),
            Bound::PositiveInfinity => Cut::Above,
        }
    }
}

impl<T: Ord> Bound<T> {
    /// Compares the bound with a value.  Infinite bounds are respectively
    /// less or greater than any value.  Openness is irrelevant here, only
    /// the values are compared.
    #[must_use]
    pub fn cmp_value(&self, value: &T) -> Ordering {
        match self {
            Bound::NegativeInfinity => Ordering::Less,
            Bound::Open(v) | Bound::Closed(v) => v.cmp(value),
            Bound::PositiveInfinity => Ordering::Greater,
        }
    }

    /// Compares two lower bounds.  The greater one is the one that
    /// excludes more values, so for equal values an open bound is greater
    /// than a closed bound.
    /// ```
    /// use interval_algebra::Bound;
    /// use std::cmp::Ordering;
    /// assert_eq!(Bound::Open(2).cmp_lower(&Bound::Closed(2)), Ordering::Greater);
    /// assert_eq!(Bound::NegativeInfinity.cmp_lower(&Bound::Open(2)), Ordering::Less);
    /// ```
    #[must_use]
    pub fn cmp_lower(&self, other: &Self) -> Ordering {
        self.lower_cut().cmp(&other.lower_cut())
    }

    /// Compares two upper bounds.  For equal values, an open bound is less
    /// than a closed bound.
    #[must_use]
    pub fn cmp_upper(&self, other: &Self) -> Ordering {
        self.upper_cut().cmp(&other.upper_cut())
    }

    /// Compares self, the lower bound of one interval, with the upper
    /// bound of another interval.
    ///
    /// `Less` means the two intervals might share values (the lower bound
    /// starts before the upper bound ends), `Equal` means they share exactly
    /// the bound value (both bounds are closed), and `Greater` means there is
    /// no common value at these bounds.  When the values are equal but at
    /// least one bound is open, the result is `Greater`: the intervals touch
    /// without overlapping.
    #[must_use]
    pub fn cmp_lower_to_upper(&self, upper: &Self) -> Ordering {
        match (self, upper) {
            (Bound::NegativeInfinity, _) | (_, Bound::PositiveInfinity) => {
                Ordering::Less
            }
            (Bound::PositiveInfinity, _) | (_, Bound::NegativeInfinity) => {
                Ordering::Greater
            }
            (Bound::Closed(l), Bound::Closed(u)) => l.cmp(u),
            (
                Bound::Open(l) | Bound::Closed(l),
                Bound::Open(u) | Bound::Closed(u),
            ) => l.cmp(u).then(Ordering::Greater),
        }
    }
}

/// A position on the line of values.  Every bound splits the values into
/// two sets, and the cut is where the split occurs.  Ordering cuts is what
/// lets us compare bounds of any kind with each other.
///
/// ```text
///               LeftOf(3)  RightOf(3)
///      Below  ... 2      |3|      4 ...  Above
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) enum Cut<'a, T> {
    Below,
    LeftOf(&'a T),
    RightOf(&'a T),
    Above,
}

impl<T> Cut<'_, T> {
    pub(crate) fn is_finite(&self) -> bool {
        matches!(self, Cut::LeftOf(_) | Cut::RightOf(_))
    }
}

impl<T: Ord> Ord for Cut<'_, T> {
    #[rustfmt::skip]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cut::Below, Cut::Below) | (Cut::Above, Cut::Above) => Ordering::Equal,
            (Cut::Below, _) | (_, Cut::Above) => Ordering::Less,
            (Cut::Above, _) | (_, Cut::Below) => Ordering::Greater,
            (Cut::LeftOf(a), Cut::LeftOf(b))
            | (Cut::RightOf(a), Cut::RightOf(b)) => a.cmp(b),
            (Cut::LeftOf(a), Cut::RightOf(b)) => a.cmp(b).then(Ordering::Less),
            (Cut::RightOf(a), Cut::LeftOf(b)) => a.cmp(b).then(Ordering::Greater),
        }
    }
}

impl<T: Ord> PartialOrd for Cut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Cut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T: Ord> Eq for Cut<'_, T> {}

#[cfg(test)]
mod test {
    use crate::bounds::{Bound, BoundType, Cut};
    use crate::errors::Error;
    use std::cmp::Ordering;

    #[test]
    fn test_bound_type() {
        assert_eq!(Bound::Open(1).bound_type(), BoundType::Open);
        assert_eq!(Bound::Closed(1).bound_type(), BoundType::Closed);
        assert_eq!(
            Bound::<u8>::NegativeInfinity.bound_type(),
            BoundType::NegativeInfinite
        );
        assert_eq!(
            Bound::<u8>::PositiveInfinity.bound_type(),
            BoundType::PositiveInfinite
        );
        assert!(Bound::Open(1).is_open());
        assert!(!Bound::Open(1).is_closed());
        assert!(Bound::Closed(1).is_finite());
        assert!(!Bound::<u8>::NegativeInfinity.is_finite());
        assert!(Bound::<u8>::NegativeInfinity.is_negative_infinity());
        assert!(Bound::<u8>::PositiveInfinity.is_positive_infinity());
    }

    #[test]
    fn test_value() {
        assert_eq!(Bound::Open(3).value(), Ok(&3));
        assert_eq!(Bound::Closed(4).value(), Ok(&4));
        assert_eq!(Bound::Closed(4).try_value(), Some(&4));
        assert!(matches!(
            Bound::<i32>::NegativeInfinity.value(),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(
            Bound::<i32>::PositiveInfinity.value(),
            Err(Error::InvalidState(_))
        ));
        assert_eq!(Bound::<i32>::PositiveInfinity.try_value(), None);
        let a = String::from("a");
        assert_eq!(Bound::Open(a.clone()).as_ref(), Bound::Open(&a));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Bound::Open(1), Bound::Open(1));
        assert_ne!(Bound::Open(1), Bound::Closed(1));
        assert_ne!(Bound::Closed(1), Bound::Closed(2));
        assert_eq!(Bound::<u8>::NegativeInfinity, Bound::NegativeInfinity);
        assert_ne!(Bound::<u8>::NegativeInfinity, Bound::PositiveInfinity);
    }

    #[test]
    fn test_cmp_value() {
        assert_eq!(Bound::NegativeInfinity.cmp_value(&i32::MIN), Ordering::Less);
        assert_eq!(
            Bound::PositiveInfinity.cmp_value(&i32::MAX),
            Ordering::Greater
        );
        assert_eq!(Bound::Open(2).cmp_value(&2), Ordering::Equal);
        assert_eq!(Bound::Closed(2).cmp_value(&2), Ordering::Equal);
        assert_eq!(Bound::Open(2).cmp_value(&3), Ordering::Less);
        assert_eq!(Bound::Closed(2).cmp_value(&1), Ordering::Greater);
    }

    #[test]
    fn test_cmp_lower() {
        assert_eq!(Bound::Open(2).cmp_lower(&Bound::Open(2)), Ordering::Equal);
        assert_eq!(
            Bound::Closed(2).cmp_lower(&Bound::Closed(2)),
            Ordering::Equal
        );
        assert_eq!(Bound::Open(2).cmp_lower(&Bound::Closed(2)), Ordering::Greater);
        assert_eq!(Bound::Closed(2).cmp_lower(&Bound::Open(2)), Ordering::Less);
        assert_eq!(Bound::Open(1).cmp_lower(&Bound::Closed(2)), Ordering::Less);
        assert_eq!(
            Bound::NegativeInfinity.cmp_lower(&Bound::Closed(i32::MIN)),
            Ordering::Less
        );
        assert_eq!(
            Bound::<i32>::NegativeInfinity.cmp_lower(&Bound::NegativeInfinity),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cmp_upper() {
        assert_eq!(Bound::Open(2).cmp_upper(&Bound::Closed(2)), Ordering::Less);
        assert_eq!(Bound::Closed(2).cmp_upper(&Bound::Open(2)), Ordering::Greater);
        assert_eq!(Bound::Closed(3).cmp_upper(&Bound::Open(2)), Ordering::Greater);
        assert_eq!(
            Bound::PositiveInfinity.cmp_upper(&Bound::Closed(i32::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            Bound::<i32>::PositiveInfinity.cmp_upper(&Bound::PositiveInfinity),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cmp_lower_to_upper() {
        // different values: plain value order
        assert_eq!(
            Bound::Open(1).cmp_lower_to_upper(&Bound::Open(2)),
            Ordering::Less
        );
        assert_eq!(
            Bound::Closed(3).cmp_lower_to_upper(&Bound::Closed(2)),
            Ordering::Greater
        );

        // [2,...] and [...,2] share 2
        assert_eq!(
            Bound::Closed(2).cmp_lower_to_upper(&Bound::Closed(2)),
            Ordering::Equal
        );

        // touching, without a common value
        assert_eq!(
            Bound::Closed(2).cmp_lower_to_upper(&Bound::Open(2)),
            Ordering::Greater
        );
        assert_eq!(
            Bound::Open(2).cmp_lower_to_upper(&Bound::Closed(2)),
            Ordering::Greater
        );
        assert_eq!(
            Bound::Open(2).cmp_lower_to_upper(&Bound::Open(2)),
            Ordering::Greater
        );

        // infinities never compare equal to a finite bound
        assert_eq!(
            Bound::NegativeInfinity.cmp_lower_to_upper(&Bound::Closed(2)),
            Ordering::Less
        );
        assert_eq!(
            Bound::Closed(2).cmp_lower_to_upper(&Bound::PositiveInfinity),
            Ordering::Less
        );
    }

    #[test]
    fn test_cuts() {
        let two = 2;
        let three = 3;
        assert!(Cut::Below < Cut::LeftOf(&two));
        assert!(Cut::LeftOf(&two) < Cut::RightOf(&two));
        assert!(Cut::RightOf(&two) < Cut::LeftOf(&three));
        assert!(Cut::RightOf(&three) < Cut::Above);
        assert!(Cut::<u8>::Below < Cut::Above);
        assert!(Cut::LeftOf(&two) == Cut::LeftOf(&two));
        assert!(Cut::LeftOf(&two).is_finite());
        assert!(!Cut::<u8>::Above.is_finite());

        assert!(Bound::Open(2).lower_cut() == Bound::Closed(2).upper_cut());
        assert!(Bound::Closed(2).lower_cut() == Bound::Open(2).upper_cut());
    }
}
