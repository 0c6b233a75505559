//! Property-based tests for channel_logger using proptest

use channel_logger::prelude::*;
use proptest::prelude::*;

fn any_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Debug),
        Just(Priority::Info),
        Just(Priority::Warning),
        Just(Priority::Error),
    ]
}

/// One step of building messages with a logger.
#[derive(Debug, Clone)]
enum Step {
    Text(String),
    SetPriority(Priority),
    Flush,
    Reset,
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Step::Text),
        any_priority().prop_map(Step::SetPriority),
        Just(Step::Flush),
        Just(Step::Reset),
    ]
}

// ============================================================================
// Priority Tests
// ============================================================================

proptest! {
    #[test]
    fn test_priority_str_roundtrip(priority in any_priority()) {
        let parsed: Priority = priority.to_str().parse().unwrap();
        prop_assert_eq!(priority, parsed);
        prop_assert_eq!(priority.to_string(), priority.to_str());
    }

    #[test]
    fn test_priority_ordering_matches_rank(a in any_priority(), b in any_priority()) {
        let (ra, rb) = (a as u8, b as u8);
        prop_assert_eq!(a < b, ra < rb);
        prop_assert_eq!(a <= b, ra <= rb);
        prop_assert_eq!(a == b, ra == rb);
        prop_assert_eq!(a.cmp(&b), ra.cmp(&rb));
    }

    #[test]
    fn test_priority_ordering_transitive(
        a in any_priority(),
        b in any_priority(),
        c in any_priority()
    ) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// Replaying random steps against a simple model: a message is queued on
    /// flush exactly when its text is non-empty and its priority passes.
    #[test]
    fn test_logger_matches_model(
        threshold in any_priority(),
        steps in prop::collection::vec(any_step(), 0..40)
    ) {
        let system = LoggerSystem::new();
        let mut logger = Logger::builder().min_priority(threshold).build_on(&system);

        let mut buffer = String::new();
        let mut priority = Priority::Info;
        let mut expected = Vec::new();

        for step in steps {
            match step {
                Step::Text(text) => {
                    logger.push(&text);
                    buffer.push_str(&text);
                }
                Step::SetPriority(p) => {
                    logger.push(Manipulator::SetPriority(p));
                    priority = p;
                }
                Step::Flush => {
                    logger.push(end());
                    if !buffer.is_empty() && priority >= threshold {
                        expected.push(std::mem::take(&mut buffer));
                    }
                    buffer.clear();
                }
                Step::Reset => {
                    logger.push(reset());
                    buffer.clear();
                }
            }
            prop_assert_eq!(logger.text(), buffer.as_str());
            prop_assert_eq!(logger.priority(), priority);
        }

        prop_assert_eq!(system.pending_count(), expected.len());

        let sink = std::sync::Arc::new(parking_lot::Mutex::new(MemorySink::new()));
        system.set_output(DEFAULT_CHANNEL, Output::shared(&sink));
        system.start();
        system.stop();
        prop_assert_eq!(sink.lock().texts(), expected);
    }

    #[test]
    fn test_format_line_is_single_line(text in ".{0,64}", priority in any_priority()) {
        let message = Message::new("prop", priority, text);
        let line = message.format_line();
        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
        prop_assert!(line.contains(priority.to_str()));
    }
}
