//! The total-order capability required by [`max`](crate::ops::max) and [`min`](crate::ops::min).

/// Types whose values can be ranked with `<` and `>`.
///
/// Implemented for all primitive integers, `f32`/`f64`, `String`, `str`, `char`
/// and (with the `ordered-float` feature) the `ordered_float` wrappers. Newtypes
/// over these can opt in with [`impl_ordered!`](crate::impl_ordered).
///
/// Raw floats only have a partial order: a `NaN` never compares greater or less
/// than anything, so it is never selected unless it is the first element.
pub trait Ordered: PartialOrd {}

/// Implements [`Ordered`] for each listed type.
///
/// ```
/// use seqfn::{impl_ordered, ops};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Celsius(f64);
///
/// impl_ordered!(Celsius);
///
/// let temps = vec![Celsius(12.5), Celsius(-3.0), Celsius(30.1)];
/// assert_eq!(ops::max(&temps), Celsius(30.1));
/// ```
#[macro_export]
macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::ordered::Ordered for $ty {})*
    };
}

impl_ordered!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String, str,
);

impl<T: Ordered + ?Sized> Ordered for &T {}

#[cfg(feature = "ordered-float")]
mod float_wrappers {
    use ordered_float::{FloatCore, NotNan, OrderedFloat};

    use super::Ordered;

    impl<T: FloatCore> Ordered for OrderedFloat<T> {}

    impl<T: FloatCore> Ordered for NotNan<T> {}
}
