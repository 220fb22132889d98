//! Property-based tests for severity_logger using proptest

use proptest::prelude::*;
use severity_logger::prelude::*;

fn buffered(hint: impl Into<LevelHint>) -> (Logger, SharedBuffer) {
    let buf = SharedBuffer::new();
    let logger = Logger::builder()
        .sink(buf.clone())
        .level_hint(hint)
        .without_timestamp()
        .build();
    (logger, buf)
}

fn named_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::DEBUG),
        Just(Severity::INFO),
        Just(Severity::WARN),
        Just(Severity::ERROR),
        Just(Severity::FATAL),
    ]
}

// ============================================================================
// Severity Label Tests
// ============================================================================

proptest! {
    /// Only the exact FATAL value renders as FATAL
    #[test]
    fn test_fatal_label_only_for_twelve(value in any::<i32>()) {
        let label = render_label(Severity::new(value));
        prop_assert_eq!(label.contains("FATAL"), value == 12);
    }

    /// Values above ERROR carry their offset from ERROR
    #[test]
    fn test_offset_above_error(value in 9i32..100_000) {
        prop_assume!(value != 12);
        let label = render_label(Severity::new(value));
        prop_assert_eq!(label.into_owned(), format!("ERROR+{}", value - 8));
    }

    /// Values below INFO are written relative to DEBUG
    #[test]
    fn test_offset_below_info(value in -100_000i32..0) {
        let label = render_label(Severity::new(value));
        prop_assert!(label.starts_with("DEBUG"));
        if value != -4 {
            let expected = format!("DEBUG{:+}", value + 4);
            prop_assert_eq!(label.into_owned(), expected);
        }
    }

    /// Named labels parse back to the same severity
    #[test]
    fn test_named_label_roundtrip(severity in named_severity()) {
        let parsed: Severity = render_label(severity).parse().unwrap();
        prop_assert_eq!(parsed, severity);
    }

    /// Label comparison never disagrees with numeric ordering
    #[test]
    fn test_ordering_is_numeric(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Severity::new(a) < Severity::new(b), a < b);
        prop_assert_eq!(Severity::new(a) == Severity::new(b), a == b);
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// A record is written exactly when its severity reaches the threshold
    #[test]
    fn test_written_iff_at_or_above_threshold(
        threshold in -50i32..50,
        severity in -50i32..50,
    ) {
        let (logger, buf) = buffered(threshold);
        logger.log(severity, "probe");
        prop_assert_eq!(!buf.is_empty(), severity >= threshold);
    }

    /// Unknown level names fall back to ERROR
    #[test]
    fn test_unknown_names_resolve_to_error(name in "[a-zA-Z]{0,12}") {
        let expected = Severity::from_name(&name).unwrap_or(Severity::ERROR);
        prop_assert_eq!(LevelHint::named(name).resolve_threshold(), expected);
    }

    /// Environment names outside the allowlist resolve to ERROR
    #[test]
    fn test_environment_allowlist(env in "[a-zA-Z]{0,12}") {
        let upper = env.to_ascii_uppercase();
        let expected = if DEBUG_ENVIRONMENTS.contains(&upper.as_str()) {
            Severity::DEBUG
        } else {
            Severity::ERROR
        };
        prop_assert_eq!(LevelHint::environment(env).resolve_threshold(), expected);
    }
}

// ============================================================================
// Output Line Tests
// ============================================================================

proptest! {
    /// Any message stays on a single line
    #[test]
    fn test_single_line_per_record(message in "(?s).*") {
        let (logger, buf) = buffered(Severity::DEBUG);
        logger.info(message);

        let out = buf.as_string();
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.matches('\n').count(), 1);
        prop_assert!(!out.contains('\r'));
    }

    /// Formatting has no hidden state
    #[test]
    fn test_repeated_records_identical(
        message in "(?s).*",
        key in "[a-z_]{1,8}",
        value in any::<i64>(),
        severity in any::<i32>(),
    ) {
        let (logger, buf) = buffered(i32::MIN);
        let context = LogContext::new().with_field(key, value);

        logger.log_with_context(severity, message.clone(), context.clone());
        let first = buf.contents();
        buf.clear();
        logger.log_with_context(severity, message, context);

        prop_assert_eq!(buf.contents(), first);
    }
}
