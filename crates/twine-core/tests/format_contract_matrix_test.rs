//! Formatting contract matrix.
//!
//! Exercises the documented composition order across digit class ×
//! alignment × padding mode × sign × prefix, the escape rules, and both
//! arity directions.

use twine_core::fmt::FormatError;
use twine_core::{try_twformat, twformat};

#[test]
fn test_documented_literal_cases() {
    assert_eq!(twformat!("{6x}", 1234), "   4d2");
    assert_eq!(twformat!("{06x}", -1234), "-004d2");
    assert_eq!(twformat!("{#08x}", 1234), "0x0004d2");
    assert_eq!(twformat!("{<6}", "TEST"), "TEST  ");
    assert_eq!(twformat!("{>6}", "TEST"), "  TEST");
}

#[test]
fn test_composition_matrix_positive() {
    // 1234 across every digit class and padding mode, width 10.
    let cases: &[(&str, &str)] = &[
        ("{10d}", "      1234"),
        ("{10x}", "       4d2"),
        ("{10X}", "       4D2"),
        ("{10o}", "      2322"),
        ("{10b}", "10011010010"),
        ("{<10d}", "1234      "),
        ("{010d}", "0000001234"),
        ("{+10d}", "     +1234"),
        ("{+010d}", "+000001234"),
        ("{#10x}", "     0x4d2"),
        ("{#010x}", "0x000004d2"),
        ("{<#10x}", "0x4d2     "),
        ("{+#010x}", "+0x00004d2"),
    ];
    for &(fmt, expected) in cases {
        assert_eq!(twformat!(fmt, 1234), expected, "directive {fmt}");
    }
}

#[test]
fn test_composition_matrix_negative() {
    let cases: &[(&str, &str)] = &[
        ("{10d}", "     -1234"),
        ("{<10d}", "-1234     "),
        ("{010d}", "-000001234"),
        ("{10x}", "      -4d2"),
        ("{010x}", "-0000004d2"),
        ("{#10x}", "    -0x4d2"),
        ("{#010x}", "-0x00004d2"),
    ];
    for &(fmt, expected) in cases {
        assert_eq!(twformat!(fmt, -1234), expected, "directive {fmt}");
    }
}

#[test]
fn test_zero_class() {
    // Zero never takes a prefix or a minus sign.
    assert_eq!(twformat!("{#x}", 0), "0");
    assert_eq!(twformat!("{#06b}", 0), "000000");
    assert_eq!(twformat!("{+04}", 0), "+000");
    assert_eq!(twformat!("{}", 0), "0");
}

#[test]
fn test_every_integer_width_renders_uniformly() {
    assert_eq!(twformat!("{04x}", 0xBEu8), "00be");
    assert_eq!(twformat!("{04x}", 0xBEu16), "00be");
    assert_eq!(twformat!("{04x}", 0xBEu32), "00be");
    assert_eq!(twformat!("{04x}", 0xBEu64), "00be");
    assert_eq!(twformat!("{}", -128i8), "-128");
    assert_eq!(twformat!("{}", i16::MIN), "-32768");
    assert_eq!(twformat!("{}", i64::MIN), "-9223372036854775808");
    assert_eq!(twformat!("{}", u64::MAX), "18446744073709551615");
}

#[test]
fn test_escape_idempotence() {
    assert_eq!(twformat!("{{{}", "x"), "{x");
    assert_eq!(twformat!("{{{{"), "{{");
    assert_eq!(twformat!("}} stays literal"), "}} stays literal");
}

#[test]
fn test_arity_boundaries() {
    assert!(matches!(
        try_twformat!("{} {}", 1),
        Err(FormatError::NotEnoughArguments { .. })
    ));
    assert_eq!(
        try_twformat!("{}", 1, 2),
        Err(FormatError::TooManyArguments { unused: 1 })
    );
    assert_eq!(try_twformat!("{}").unwrap_err(), {
        FormatError::NotEnoughArguments { at: 0 }
    });
}

#[test]
fn test_positional_selection() {
    assert_eq!(twformat!("{2$} {1$}", "first", "second"), "second first");
    assert_eq!(twformat!("{2$x} {}{}{}", 10, 11, "!"), "b 1011!");
    assert_eq!(
        try_twformat!("{5$}", "a"),
        Err(FormatError::IndexOutOfRange { index: 5, count: 1 })
    );
}

#[test]
fn test_string_truncation_and_fill() {
    assert_eq!(twformat!("{.3}", "TRUNCATE"), "TRU");
    assert_eq!(twformat!("{_.8.3}", "TRUNCATE"), "TRU.....");
    assert_eq!(twformat!("{>_08}", "ab"), "000000ab");
}

#[test]
fn test_float_directives() {
    assert_eq!(twformat!("{.2f}", 3.14159), "3.14");
    assert_eq!(twformat!("{10.2f}", -3.5), "     -3.50");
    assert_eq!(twformat!("{010.2f}", -3.5), "-000003.50");
    assert_eq!(twformat!("{.1e}", 1500.0), "1.5e+03");
    assert_eq!(twformat!("{}", 1.5), "1.5");
    assert_eq!(twformat!("{8}", f64::NAN), "     nan");
}

#[test]
fn test_float_code_is_catchable() {
    use twine_core::fmt::format_float_code;
    assert_eq!(
        format_float_code(1.0, 'z', None),
        Err(FormatError::BadFloatFormat { code: 'z' })
    );
}

#[test]
fn test_mixed_argument_types() {
    let name = String::from("twine");
    let s = twformat!("{}: {} {} {c} {>5.1f}", name, true, 'v', 48u32, 2.75);
    assert_eq!(s, "twine: true v 0   2.8");
}
