//! Declarative macros for generating CLI parsing and report encoding tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macro generate the actual test code.

/// Generate a single CLI option test.
///
/// # Example
///
/// ```ignore
/// cli_option_test! {
///     test_name: test_format_structured,
///     args: ["--format", "structured", "-ander", "a/llvm/x.ll"],
///     field: format,
///     expected: Some(ReportFormat::Structured),
/// }
/// ```
#[macro_export]
macro_rules! cli_option_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from(["pta_report", $($arg),+]).unwrap();
            assert_eq!(args.$field, $expected,
                concat!("Field ", stringify!($field), " mismatch"));
        }
    };
}

/// Generate a test that verifies parsing fails with specific args.
#[macro_export]
macro_rules! cli_error_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["pta_report", $($arg),+]);
            assert!(result.is_err(),
                concat!("Should reject args: ", $(stringify!($arg), " "),+));
        }
    };
}

/// Generate a test comparing a report's encoding against an expected string.
///
/// # Example
///
/// ```ignore
/// encoding_test! {
///     test_name: test_flat_single,
///     fixture: single_report,
///     fixture_type: PointsToReport,
///     expected: SINGLE_FLAT,
///     format: Flat,
/// }
/// ```
#[macro_export]
macro_rules! encoding_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use $crate::output::{Encodable, ReportFormat};
            assert_eq!($fixture.encode(ReportFormat::$format), $expected);
        }
    };
}

/// Generate a test that checks an encoding contains (and lacks) substrings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! encoding_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        format: $format:ident,
        contains: [$($needle:literal),* $(,)?]
        $(, excludes: [$($absent:literal),* $(,)?])? $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use $crate::output::{Encodable, ReportFormat};
            let output = $fixture.encode(ReportFormat::$format);
            $(
                assert!(output.contains($needle),
                    "Expected output to contain {:?}:\n{}", $needle, output);
            )*
            $($(
                assert!(!output.contains($absent),
                    "Expected output not to contain {:?}:\n{}", $absent, output);
            )*)?
        }
    };
}
