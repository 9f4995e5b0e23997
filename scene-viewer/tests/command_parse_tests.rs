use scene_viewer::console::command::{Command, CommandError, PoseUpdate};

#[cfg(test)]
mod command_parse_tests {
    use super::*;

    fn teleport(raw: &str) -> PoseUpdate {
        match Command::parse(raw) {
            Ok(Some(Command::Teleport(update))) => update,
            other => panic!("expected teleport for '{raw}', got {other:?}"),
        }
    }

    #[test]
    fn test_full_teleport_parses_all_six_slots() {
        let update = teleport("tp 1 2 3 0.1 0.2 0.3");

        assert_eq!(update.position, [Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(update.rotation, [Some(0.1), Some(0.2), Some(0.3)]);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        assert_eq!(Command::parse(""), Ok(None));
    }

    #[test]
    fn test_unknown_verb_is_ignored() {
        assert_eq!(Command::parse("foo 1 2 3"), Ok(None));
    }

    #[test]
    fn test_verb_is_case_sensitive() {
        assert_eq!(Command::parse("TP 1 2 3"), Ok(None));
    }

    #[test]
    fn test_partial_command_fills_leading_slots_only() {
        let update = teleport("tp 5");

        assert_eq!(update.position, [Some(5.0), None, None]);
        assert_eq!(update.rotation, [None, None, None]);
    }

    #[test]
    fn test_sentinel_skips_individual_slots() {
        let update = teleport("tp ~ 2 ~ 4");

        assert_eq!(update.position, [None, Some(2.0), None]);
        assert_eq!(update.rotation, [Some(4.0), None, None]);
    }

    #[test]
    fn test_all_sentinels_is_empty_update() {
        let update = teleport("tp ~ ~ ~ ~ ~ ~");

        assert!(update.is_empty());
    }

    #[test]
    fn test_double_space_yields_empty_token_that_skips() {
        let update = teleport("tp  2 3");

        assert_eq!(update.position, [None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_trailing_space_yields_empty_token_that_skips() {
        let update = teleport("tp 1 ");

        assert_eq!(update.position, [Some(1.0), None, None]);
    }

    #[test]
    fn test_tokens_past_slot_six_are_ignored() {
        let update = teleport("tp 1 2 3 4 5 6 99 98");

        assert_eq!(update.position, [Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(update.rotation, [Some(4.0), Some(5.0), Some(6.0)]);
    }

    #[test]
    fn test_negative_decimal_and_exponent_values_parse() {
        let update = teleport("tp -1.5 0.25 1e2");

        assert_eq!(update.position, [Some(-1.5), Some(0.25), Some(100.0)]);
    }

    #[test]
    fn test_malformed_number_rejects_whole_command() {
        let result = Command::parse("tp abc 2 3 4 5 6");

        assert_eq!(
            result,
            Err(CommandError::InvalidNumber {
                slot: 1,
                token: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_number_reports_failing_slot() {
        let result = Command::parse("tp 1 2 3 4 5 x");

        assert_eq!(
            result,
            Err(CommandError::InvalidNumber {
                slot: 6,
                token: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_number_with_trailing_garbage_is_rejected() {
        // Strict parsing: "1.5x" is not a float, unlike lenient prefix parsing.
        let result = Command::parse("tp 1.5x");

        assert!(matches!(result, Err(CommandError::InvalidNumber { slot: 1, .. })));
    }
}
