/// Whether there is any value strictly between two values.
///
/// This is what distinguishes discrete types, like integers, from continuous
/// ones.  The intervals `[1, 2]` and `[3, 4]` of integers leave no value
/// out, so they touch and can be merged with [`crate::Interval::merge()`].
/// The same intervals over decimals have a gap, `(2, 3)`.
///
/// This trait is only used by the discrete operations
/// [`crate::Interval::touches()`] and [`crate::Interval::merge()`].  The
/// core algebra ([`crate::Interval::is_adjacent_to()`],
/// [`crate::Interval::union()`]) never looks at it.
///
/// You can implement it for your own types:
/// ```
///     use interval_algebra::NothingBetween;
///     #[derive(PartialEq, Eq, PartialOrd, Ord)]
///     struct Real(i64);
///     impl NothingBetween for Real {
///         fn nothing_between(&self, other: &Self) -> bool {
///             other <= self
///         }
///     }
/// ```
pub trait NothingBetween {
    /// True if there is no value x such that `self < x < other`.
    /// This is always true when `other <= self`.
    fn nothing_between(&self, other: &Self) -> bool;
}

macro_rules! discrete_integers {
    ($($t:ty),*) => {
        $(
            impl NothingBetween for $t {
                fn nothing_between(&self, other: &Self) -> bool {
                    self.checked_add(1).map_or(true, |next| next >= *other)
                }
            }
        )*
    };
}

discrete_integers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl NothingBetween for char {
    fn nothing_between(&self, other: &Self) -> bool {
        // Surrogates are not valid chars
        let next = match *self as u32 + 1 {
            0xD800 => 0xE000,
            n => n,
        };
        char::from_u32(next).map_or(true, |next| next >= *other)
    }
}

#[cfg(feature = "chrono")]
impl NothingBetween for chrono::NaiveDate {
    fn nothing_between(&self, other: &Self) -> bool {
        self.succ_opt().map_or(true, |next| next >= *other)
    }
}

#[cfg(feature = "rust_decimal")]
impl NothingBetween for rust_decimal::Decimal {
    fn nothing_between(&self, other: &Self) -> bool {
        other <= self
    }
}
