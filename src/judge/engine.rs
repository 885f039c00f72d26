//! Judge engine
//!
//! Fans the selected test cases out to the execution service concurrently,
//! normalizes the outputs, and aggregates the per-case outcomes into a
//! verdict. The engine itself never fails: execution errors become failing
//! test results carrying the error message, and the remaining cases still
//! run to completion.

use std::sync::Arc;

use futures::future;

use crate::{
    judge::executor::CodeExecutor,
    models::{TestCase, TestResult},
};

/// Aggregate outcome of one judging run
#[derive(Debug, Clone)]
pub struct JudgeVerdict {
    /// Per-case results, in the order of the input test-case sequence
    pub results: Vec<TestResult>,
    /// Logical AND over the per-case `passed` flags; true for an empty run
    pub all_passed: bool,
}

/// Orchestrates concurrent evaluation of a submission against a test suite
#[derive(Clone)]
pub struct JudgeEngine {
    executor: Arc<dyn CodeExecutor>,
}

impl JudgeEngine {
    /// Create an engine dispatching to the given executor
    pub fn new(executor: Arc<dyn CodeExecutor>) -> Self {
        Self { executor }
    }

    /// Judge `code` against `cases`
    ///
    /// All cases are dispatched at once and joined as a batch; results come
    /// back in input order regardless of completion order. Outputs are
    /// compared after trimming leading/trailing whitespace on both sides so
    /// a trailing newline never fails a case.
    pub async fn judge(&self, code: &str, language: &str, cases: &[TestCase]) -> JudgeVerdict {
        let runs = cases.iter().map(|case| {
            let executor = Arc::clone(&self.executor);
            async move {
                match executor.execute(code, language, &case.input).await {
                    Ok(output) => {
                        let user_output = output.trim();
                        let expected_output = case.expected_output.trim();
                        TestResult {
                            input: case.input.clone(),
                            expected_output: expected_output.to_string(),
                            user_output: user_output.to_string(),
                            passed: user_output == expected_output,
                            error: None,
                        }
                    }
                    Err(err) => TestResult {
                        input: case.input.clone(),
                        expected_output: case.expected_output.trim().to_string(),
                        user_output: String::new(),
                        passed: false,
                        error: Some(err.to_string()),
                    },
                }
            }
        });

        let results = future::join_all(runs).await;
        let all_passed = results.iter().all(|r| r.passed);

        JudgeVerdict {
            results,
            all_passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::judge::executor::ExecutionError;

    /// Executor that answers from a fixed table, with optional per-input
    /// delays and failures, so completion order can be controlled.
    #[derive(Default)]
    struct ScriptedExecutor {
        outputs: HashMap<String, String>,
        fail_on: HashSet<String>,
        delay_ms: HashMap<String, u64>,
    }

    impl ScriptedExecutor {
        fn answer(mut self, input: &str, output: &str) -> Self {
            self.outputs.insert(input.to_string(), output.to_string());
            self
        }

        fn fail(mut self, input: &str) -> Self {
            self.fail_on.insert(input.to_string());
            self
        }

        fn delay(mut self, input: &str, ms: u64) -> Self {
            self.delay_ms.insert(input.to_string(), ms);
            self
        }
    }

    #[async_trait]
    impl CodeExecutor for ScriptedExecutor {
        async fn execute(
            &self,
            _code: &str,
            _language: &str,
            input: &str,
        ) -> Result<String, ExecutionError> {
            if let Some(ms) = self.delay_ms.get(input) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.fail_on.contains(input) {
                return Err(ExecutionError::Transport("connection refused".to_string()));
            }
            Ok(self.outputs.get(input).cloned().unwrap_or_default())
        }
    }

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_sample: true,
            position: 0,
            created_at: Utc::now(),
        }
    }

    fn engine(executor: ScriptedExecutor) -> JudgeEngine {
        JudgeEngine::new(Arc::new(executor))
    }

    #[tokio::test]
    async fn test_all_passed_is_and_of_case_results() {
        let engine = engine(
            ScriptedExecutor::default()
                .answer("1 2", "3")
                .answer("10 20", "31"),
        );
        let cases = vec![case("1 2", "3"), case("10 20", "30")];

        let verdict = engine.judge("code", "cpp", &cases).await;
        assert_eq!(
            verdict.results.iter().map(|r| r.passed).collect::<Vec<_>>(),
            vec![true, false]
        );
        assert!(!verdict.all_passed);
    }

    #[tokio::test]
    async fn test_empty_suite_is_vacuously_passing() {
        let engine = engine(ScriptedExecutor::default());

        let verdict = engine.judge("code", "cpp", &[]).await;
        assert!(verdict.results.is_empty());
        assert!(verdict.all_passed);
    }

    #[tokio::test]
    async fn test_trailing_whitespace_never_fails_a_case() {
        // The worked example: expected "3", program prints "3\n".
        let engine = engine(ScriptedExecutor::default().answer("1 2", "3\n"));

        let verdict = engine.judge("code", "cpp", &[case("1 2", "3")]).await;
        assert!(verdict.all_passed);
        assert_eq!(verdict.results[0].user_output, "3");
    }

    #[tokio::test]
    async fn test_internal_whitespace_still_fails() {
        let engine = engine(ScriptedExecutor::default().answer("x", "a  b"));

        let verdict = engine.judge("code", "cpp", &[case("x", "a b")]).await;
        assert!(!verdict.all_passed);
    }

    #[tokio::test]
    async fn test_wrong_answer_keeps_user_output() {
        let engine = engine(ScriptedExecutor::default().answer("1 2", "4"));

        let verdict = engine.judge("code", "cpp", &[case("1 2", "3")]).await;
        assert!(!verdict.all_passed);
        assert_eq!(verdict.results[0].user_output, "4");
        assert!(verdict.results[0].error.is_none());
    }

    #[tokio::test]
    async fn test_results_keep_input_order_despite_completion_order() {
        // A finishes last, B first; results must still read A, B, C.
        let engine = engine(
            ScriptedExecutor::default()
                .answer("A", "1")
                .answer("B", "2")
                .answer("C", "3")
                .delay("A", 60)
                .delay("B", 5)
                .delay("C", 25),
        );
        let cases = vec![case("A", "1"), case("B", "2"), case("C", "3")];

        let verdict = engine.judge("code", "cpp", &cases).await;
        let inputs: Vec<&str> = verdict.results.iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["A", "B", "C"]);
        assert!(verdict.all_passed);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let engine = engine(
            ScriptedExecutor::default()
                .answer("A", "1")
                .fail("B")
                .answer("C", "3"),
        );
        let cases = vec![case("A", "1"), case("B", "2"), case("C", "3")];

        let verdict = engine.judge("code", "cpp", &cases).await;
        assert_eq!(verdict.results.len(), 3);
        assert!(verdict.results[0].passed);
        assert!(!verdict.results[1].passed);
        assert!(verdict.results[2].passed);

        let errored = &verdict.results[1];
        assert_eq!(errored.user_output, "");
        assert!(errored.error.as_deref().unwrap().contains("connection refused"));
        assert!(!verdict.all_passed);
    }
}
