use radixa::{
    codec::{Radix, SignMode, decode, decode_signed, encode, encode::complement_capacity, encode_signed},
    error::{DecodeError, EncodeError, RadixError},
};

fn radix(r: u32) -> Radix {
    Radix::new(r).unwrap_or_else(|e| panic!("radix {r} rejected: {e}"))
}

fn is_overflow(result: Result<i32, DecodeError>) -> bool {
    matches!(result, Err(DecodeError::Overflow { .. }))
}

#[test]
fn decoding_ignores_letter_case() {
    assert_eq!(decode("ff", Radix::HEXADECIMAL, false), Ok(255));
    assert_eq!(decode("FF", Radix::HEXADECIMAL, false), Ok(255));
    assert_eq!(decode("fF", Radix::HEXADECIMAL, false), Ok(255));
    assert_eq!(decode("zz", radix(36), false), decode("ZZ", radix(36), false));
}

#[test]
fn invalid_digit_is_error() {
    assert_eq!(decode("G", Radix::HEXADECIMAL, false),
               Err(DecodeError::InvalidDigit { digit:    'G',
                                               position: 0,
                                               radix:    16, }));
    assert_eq!(decode("1012", Radix::BINARY, false),
               Err(DecodeError::InvalidDigit { digit:    '2',
                                               position: 3,
                                               radix:    2, }));
    assert!(matches!(decode("-5", Radix::DECIMAL, true),
                     Err(DecodeError::InvalidDigit { digit: '-', .. })));
    assert!(matches!(decode("1 0", Radix::DECIMAL, false),
                     Err(DecodeError::InvalidDigit { digit: ' ', .. })));
    assert!(matches!(decode("é", radix(36), false),
                     Err(DecodeError::InvalidDigit { digit: 'é', .. })));
}

#[test]
fn empty_input_is_error() {
    assert_eq!(decode("", Radix::DECIMAL, false), Err(DecodeError::Empty));
    assert_eq!(decode("", Radix::BINARY, true), Err(DecodeError::Empty));
}

#[test]
fn signed_and_unsigned_boundaries() {
    assert_eq!(decode("1000", Radix::BINARY, true), Ok(-8));
    assert_eq!(decode("1000", Radix::BINARY, false), Ok(8));
    assert_eq!(decode("0111", Radix::BINARY, true), Ok(7));
    assert_eq!(decode("1", Radix::BINARY, true), Ok(-1));
    assert_eq!(decode("5", Radix::DECIMAL, true), Ok(-5));
    assert_eq!(decode("4", Radix::DECIMAL, true), Ok(4));
    assert_eq!(decode("80", Radix::HEXADECIMAL, true), Ok(-128));
    assert_eq!(decode("7F", Radix::HEXADECIMAL, true), Ok(127));
    // Odd radix: 3^2 = 9, so magnitudes from 4 upwards are negative.
    assert_eq!(decode("11", radix(3), true), Ok(-5));
    assert_eq!(decode("10", radix(3), true), Ok(3));
}

#[test]
fn positive_signed_values_gain_a_leading_zero() {
    assert_eq!(encode(8, Radix::BINARY, true), Ok("01000".to_string()));
    assert_eq!(decode("01000", Radix::BINARY, true), Ok(8));
    assert_eq!(encode(5, Radix::DECIMAL, true), Ok("05".to_string()));
    assert_eq!(encode(4, Radix::DECIMAL, true), Ok("4".to_string()));
    assert_eq!(encode(128, Radix::HEXADECIMAL, true), Ok("080".to_string()));
    assert_eq!(encode(1, radix(3), true), Ok("01".to_string()));
    assert_eq!(encode(8, Radix::BINARY, false), Ok("1000".to_string()));
}

#[test]
fn odd_radices_only_pad_values_that_would_read_as_negative() {
    // 3^2 / 2 = 4: "10" (3) is positive as is, "11" (4) is not.
    assert_eq!(encode(3, radix(3), true), Ok("10".to_string()));
    assert_eq!(decode("10", radix(3), true), Ok(3));
    assert_eq!(encode(4, radix(3), true), Ok("011".to_string()));
    assert_eq!(decode("011", radix(3), true), Ok(4));
    // 5^2 / 2 = 12: a leading 2 only reads as negative from 12 upwards.
    assert_eq!(encode(11, radix(5), true), Ok("21".to_string()));
    assert_eq!(encode(12, radix(5), true), Ok("022".to_string()));
    assert_eq!(encode(2, radix(5), true), Ok("02".to_string()));
    assert_eq!(encode(387_420_489, radix(3), true).map(|d| d.len()), Ok(19));
}

#[test]
fn negative_values_use_the_narrowest_complement() {
    assert_eq!(encode(-1, Radix::BINARY, true), Ok("1".to_string()));
    assert_eq!(encode(-3, Radix::BINARY, true), Ok("101".to_string()));
    assert_eq!(encode(-4, Radix::BINARY, true), Ok("100".to_string()));
    assert_eq!(encode(-8, Radix::BINARY, true), Ok("1000".to_string()));
    assert_eq!(encode(-1, Radix::HEXADECIMAL, true), Ok("F".to_string()));
    assert_eq!(encode(-128, Radix::HEXADECIMAL, true), Ok("80".to_string()));
    assert_eq!(encode(-5, Radix::DECIMAL, true), Ok("5".to_string()));
    assert_eq!(encode(-100, Radix::DECIMAL, true), Ok("900".to_string()));
    assert_eq!(encode(-9, radix(3), true), Ok("200".to_string()));
}

#[test]
fn binary_sign_modes_read_and_write_alike() {
    let cases = [(0, "0", "0"),
                 (5, "0101", "0101"),
                 (-1, "10", "11"),
                 (-5, "1010", "1101"),
                 (-8, "10111", "11000"),
                 (-127, "10000000", "11111111")];

    for (value, ones, magnitude) in cases {
        assert_eq!(encode_signed(value, Radix::BINARY, SignMode::OnesComplement), ones);
        assert_eq!(decode_signed(ones, Radix::BINARY, SignMode::OnesComplement), Ok(value));
        assert_eq!(encode_signed(value, Radix::BINARY, SignMode::SignAndMagnitude), magnitude);
        assert_eq!(decode_signed(magnitude, Radix::BINARY, SignMode::SignAndMagnitude),
                   Ok(value));
    }
}

#[test]
fn negative_zero_decodes_as_zero() {
    for digits in ["1", "11", "1111"] {
        assert_eq!(decode_signed(digits, Radix::BINARY, SignMode::OnesComplement), Ok(0));
    }
    for digits in ["1", "10", "1000"] {
        assert_eq!(decode_signed(digits, Radix::BINARY, SignMode::SignAndMagnitude), Ok(0));
    }
}

#[test]
fn sign_modes_reach_the_width_limit() {
    let ones_min = format!("10{}", "1".repeat(31));
    assert_eq!(encode_signed(i32::MIN, Radix::BINARY, SignMode::OnesComplement), ones_min);
    assert_eq!(decode_signed(&ones_min, Radix::BINARY, SignMode::OnesComplement),
               Ok(i32::MIN));

    let magnitude_min = format!("11{}", "0".repeat(31));
    assert_eq!(encode_signed(i32::MIN, Radix::BINARY, SignMode::SignAndMagnitude),
               magnitude_min);
    assert_eq!(decode_signed(&magnitude_min, Radix::BINARY, SignMode::SignAndMagnitude),
               Ok(i32::MIN));

    assert!(is_overflow(decode_signed(&format!("1{}", "0".repeat(32)),
                                      Radix::BINARY,
                                      SignMode::OnesComplement)));
    assert!(is_overflow(decode_signed(&format!("11{}1", "0".repeat(30)),
                                      Radix::BINARY,
                                      SignMode::SignAndMagnitude)));
}

#[test]
fn ones_complement_is_the_diminished_complement_elsewhere() {
    assert_eq!(encode_signed(-1, Radix::DECIMAL, SignMode::OnesComplement), "8");
    assert_eq!(decode_signed("8", Radix::DECIMAL, SignMode::OnesComplement), Ok(-1));
    assert_eq!(decode_signed("99", Radix::DECIMAL, SignMode::OnesComplement), Ok(0));
    assert_eq!(decode_signed("FE", Radix::HEXADECIMAL, SignMode::RadixComplement),
               decode("FE", Radix::HEXADECIMAL, true));
}

#[test]
fn complement_width_is_exact_at_powers_of_the_radix() {
    for r in 2..=36 {
        let base = u128::from(r);
        let mut power = base;
        while power <= 1 << 31 {
            for magnitude in [power - 1, power, power + 1] {
                if magnitude == 0 || magnitude > 1 << 31 {
                    continue;
                }
                let capacity = complement_capacity(magnitude, radix(r));
                assert!(capacity > magnitude);
                assert!(capacity - magnitude >= capacity / 2);
                let narrower = capacity / base;
                assert!(capacity == base
                        || narrower < magnitude
                        || narrower - magnitude < narrower / 2,
                        "radix {r}: capacity {capacity} for -{magnitude} is not the narrowest");
            }
            power *= base;
        }
    }
}

#[test]
fn zero_encodes_as_a_single_digit() {
    for r in 2..=36 {
        assert_eq!(encode(0, radix(r), false), Ok("0".to_string()));
        assert_eq!(encode(0, radix(r), true), Ok("0".to_string()));
        assert_eq!(decode("0", radix(r), true), Ok(0));
    }
}

#[test]
fn negative_unsigned_is_error() {
    assert_eq!(encode(-1, Radix::BINARY, false),
               Err(EncodeError::NegativeUnsigned { value: -1 }));
    assert_eq!(encode(i32::MIN, Radix::HEXADECIMAL, false),
               Err(EncodeError::NegativeUnsigned { value: i32::MIN }));
}

#[test]
fn radix_36_spans_the_whole_alphabet() {
    let digits = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    for (value, digit) in digits.chars().enumerate() {
        assert_eq!(decode(&digit.to_string(), radix(36), false),
                   Ok(i32::try_from(value).unwrap()));
    }
    assert_eq!(decode("ZZ", radix(36), false), Ok(1295));
    assert_eq!(encode(1295, radix(36), false), Ok("ZZ".to_string()));
    assert_eq!(encode(i32::MAX, radix(36), false), Ok("ZIK0ZJ".to_string()));
    assert_eq!(decode("ZIK0ZJ", radix(36), false), Ok(i32::MAX));
    assert_eq!(decode("09AZ", radix(36), false), Ok(9 * 36 * 36 + 10 * 36 + 35));
}

#[test]
fn binary_round_trips_at_the_width_limit() {
    let max = "1".repeat(31);
    assert_eq!(encode(i32::MAX, Radix::BINARY, false), Ok(max.clone()));
    assert_eq!(decode(&max, Radix::BINARY, false), Ok(i32::MAX));

    let signed_max = format!("0{max}");
    assert_eq!(encode(i32::MAX, Radix::BINARY, true), Ok(signed_max.clone()));
    assert_eq!(decode(&signed_max, Radix::BINARY, true), Ok(i32::MAX));

    let min = format!("1{}", "0".repeat(31));
    assert_eq!(encode(i32::MIN, Radix::BINARY, true), Ok(min.clone()));
    assert_eq!(decode(&min, Radix::BINARY, true), Ok(i32::MIN));

    assert_eq!(decode(&"1".repeat(32), Radix::BINARY, true), Ok(-1));
}

#[test]
fn overflow_is_rejected_not_wrapped() {
    assert_eq!(decode("7FFFFFFF", Radix::HEXADECIMAL, false), Ok(i32::MAX));
    assert!(is_overflow(decode("80000000", Radix::HEXADECIMAL, false)));
    assert!(is_overflow(decode("FFFFFFFF", Radix::HEXADECIMAL, false)));
    assert_eq!(decode("FFFFFFFF", Radix::HEXADECIMAL, true), Ok(-1));
    assert_eq!(decode("80000000", Radix::HEXADECIMAL, true), Ok(i32::MIN));
    assert!(is_overflow(decode("100000000", Radix::HEXADECIMAL, true)));
    assert!(is_overflow(decode(&format!("1{}", "0".repeat(32)), Radix::BINARY, true)));
    assert!(is_overflow(decode("2147483648", Radix::DECIMAL, false)));
    assert!(is_overflow(decode("HELLOWORLD", radix(36), false)));
    assert_eq!(decode("HELLOWORLD", radix(36), true),
               Err(DecodeError::Overflow { digits: "HELLOWORLD".to_string(),
                                           signed: true, }));
}

#[test]
fn long_digit_strings_stay_exact() {
    let padded = format!("{}1", "0".repeat(200));
    assert_eq!(decode(&padded, Radix::BINARY, false), Ok(1));
    assert_eq!(decode(&padded, Radix::BINARY, true), Ok(1));
    assert_eq!(decode(&"1".repeat(127), Radix::BINARY, true), Ok(-1));
    // The capacity 2^128 no longer fits the intermediate width, so the sign of
    // this string cannot be decided and it is rejected.
    assert!(is_overflow(decode(&"1".repeat(128), Radix::BINARY, true)));
    assert!(is_overflow(decode(&"1".repeat(129), Radix::BINARY, false)));
}

#[test]
fn radix_is_checked_on_construction() {
    assert_eq!(Radix::new(1), Err(RadixError::OutOfRange { radix: 1 }));
    assert_eq!(Radix::new(37), Err(RadixError::OutOfRange { radix: 37 }));
    assert!(Radix::try_from(0).is_err());
    assert!(Radix::try_from(2).is_ok());
    assert!(Radix::try_from(36).is_ok());
}

#[test]
fn signed_and_unsigned_round_trip_in_every_radix() {
    for r in 2..=36 {
        let rx = radix(r);
        let step = i32::try_from(r).unwrap();
        let values = [0,
                      1,
                      -1,
                      2,
                      -2,
                      step - 1,
                      -(step - 1),
                      step,
                      -step,
                      step / 2,
                      -(step / 2),
                      step * step,
                      -(step * step),
                      1000,
                      -1000,
                      123_456_789,
                      -123_456_789,
                      i32::MAX - 1,
                      i32::MIN + 1,
                      i32::MAX,
                      i32::MIN];

        for value in values {
            let digits = encode(value, rx, true).unwrap();
            assert_eq!(decode(&digits, rx, true), Ok(value), "radix {r}, signed {digits}");

            if value >= 0 {
                let digits = encode(value, rx, false).unwrap();
                assert_eq!(decode(&digits, rx, false), Ok(value), "radix {r}, unsigned {digits}");
                assert!(digits == "0" || !digits.starts_with('0'));
            }
        }
    }
}
