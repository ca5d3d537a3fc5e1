/// Shorthand for creating a fraction in tests.
///
/// Panics if the denominator is zero.
#[macro_export]
macro_rules! FR {
    ($value:expr) => {
        $crate::Fraction::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction::new($numer, $denom).unwrap()
    };
}
