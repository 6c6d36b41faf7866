/// Computes `radix^exponent` exactly, if it fits into a `u128`.
///
/// Exponentiation is done in integer arithmetic only, so powers that land
/// exactly on a boundary are never rounded.
///
/// ## Parameters
/// - `radix`: The base of the power.
/// - `exponent`: The exponent, usually a digit count.
///
/// ## Returns
/// - `Some(u128)`: The exact power.
/// - `None`: If the power exceeds `u128::MAX`.
///
/// ## Example
/// ```
/// use radixa::util::num::checked_radix_pow;
///
/// assert_eq!(checked_radix_pow(2, 32), Some(1 << 32));
/// assert_eq!(checked_radix_pow(36, 0), Some(1));
/// assert_eq!(checked_radix_pow(2, 128), None);
/// ```
#[must_use]
pub fn checked_radix_pow(radix: u32, exponent: usize) -> Option<u128> {
    let exponent = u32::try_from(exponent).ok()?;
    u128::from(radix).checked_pow(exponent)
}

/// Safely narrows a non-negative magnitude to an `i32` if and only if it is
/// exactly representable.
///
/// ## Parameters
/// - `magnitude`: The value to narrow.
///
/// ## Returns
/// - `Some(i32)`: The narrowed value.
/// - `None`: If the magnitude exceeds `i32::MAX`.
///
/// ## Example
/// ```
/// use radixa::util::num::u128_to_value_checked;
///
/// assert_eq!(u128_to_value_checked(255), Some(255));
/// assert_eq!(u128_to_value_checked(1 << 31), None);
/// ```
#[must_use]
pub fn u128_to_value_checked(magnitude: u128) -> Option<i32> {
    i32::try_from(magnitude).ok()
}

/// Safely computes `-magnitude` as an `i32` if and only if it is exactly
/// representable.
///
/// The negative range of `i32` is one larger than the positive one, so
/// `2^31` is still accepted here.
///
/// ## Returns
/// - `Some(i32)`: The negated value.
/// - `None`: If the magnitude exceeds `2^31`.
///
/// ## Example
/// ```
/// use radixa::util::num::negated_u128_to_value_checked;
///
/// assert_eq!(negated_u128_to_value_checked(8), Some(-8));
/// assert_eq!(negated_u128_to_value_checked(1 << 31), Some(i32::MIN));
/// assert_eq!(negated_u128_to_value_checked((1 << 31) + 1), None);
/// ```
#[must_use]
pub fn negated_u128_to_value_checked(magnitude: u128) -> Option<i32> {
    i64::try_from(magnitude).ok()
                            .and_then(|m| i32::try_from(-m).ok())
}

/// Widens a value's absolute value to a `u128` magnitude.
///
/// Never fails; `i32::MIN` maps to `2^31`.
///
/// ## Example
/// ```
/// use radixa::util::num::value_magnitude;
///
/// assert_eq!(value_magnitude(-8), 8);
/// assert_eq!(value_magnitude(i32::MIN), 1 << 31);
/// ```
#[must_use]
pub fn value_magnitude(value: i32) -> u128 {
    u128::from(value.unsigned_abs())
}
