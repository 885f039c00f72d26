//! Test-case selection
//!
//! The pre-submission "run" action only sees cases marked as samples;
//! grading a submit uses the complete suite including hidden cases.

use crate::models::TestCase;

/// Which slice of a problem's suite to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeMode {
    /// Public sample cases only (the "run" action)
    Sample,
    /// The full suite including hidden cases (the "submit" action)
    Full,
}

/// Select the cases to evaluate, preserving the authored order
pub fn select_cases(cases: &[TestCase], mode: JudgeMode) -> Vec<TestCase> {
    match mode {
        JudgeMode::Full => cases.to_vec(),
        JudgeMode::Sample => cases.iter().filter(|c| c.is_sample).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn case(input: &str, is_sample: bool, position: i32) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            input: input.to_string(),
            expected_output: String::new(),
            is_sample,
            position,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sample_mode_keeps_only_samples_in_order() {
        let cases = vec![
            case("s1", true, 0),
            case("h1", false, 1),
            case("s2", true, 2),
            case("h2", false, 3),
            case("s3", true, 4),
        ];

        let selected = select_cases(&cases, JudgeMode::Sample);
        let inputs: Vec<&str> = selected.iter().map(|c| c.input.as_str()).collect();
        assert_eq!(inputs, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_full_mode_keeps_everything() {
        let cases = vec![
            case("s1", true, 0),
            case("h1", false, 1),
            case("s2", true, 2),
            case("h2", false, 3),
            case("s3", true, 4),
        ];

        let selected = select_cases(&cases, JudgeMode::Full);
        assert_eq!(selected.len(), 5);
        let inputs: Vec<&str> = selected.iter().map(|c| c.input.as_str()).collect();
        assert_eq!(inputs, vec!["s1", "h1", "s2", "h2", "s3"]);
    }

    #[test]
    fn test_empty_suite_selects_nothing() {
        assert!(select_cases(&[], JudgeMode::Sample).is_empty());
        assert!(select_cases(&[], JudgeMode::Full).is_empty());
    }
}
