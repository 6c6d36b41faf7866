/// Exact integer helpers.
///
/// This module provides checked powers of a radix and lossless narrowing
/// from the 128-bit intermediate width used while decoding down to the
/// 32-bit value width. Use these helpers whenever a digit string's magnitude
/// has to become a value, so that overflow is reported instead of wrapped.
///
/// All narrowing functions return an `Option`, which is `Some` if the value is
/// representable and `None` otherwise.
pub mod num;
