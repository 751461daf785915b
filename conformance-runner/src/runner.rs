use pregcompat::{Context, ErrorCode, PregError, quote};
use serde_json::{Map, Value};

use crate::case::{Case, Op};

#[derive(Debug, Clone)]
pub enum CaseResult {
    Passed,
    Failed(String),
    Skipped(String),
}

/// Runs one case in a fresh context and checks its outcome.
pub fn run_case(case: &Case) -> CaseResult {
    if let Some(reason) = &case.skip {
        return CaseResult::Skipped(reason.clone());
    }
    if case.expect.is_some() == case.error.is_some() {
        return CaseResult::Failed("case needs exactly one of `expect` or `error`".into());
    }

    let mut ctx = Context::new();
    let outcome = match execute(&mut ctx, case) {
        Ok(outcome) => outcome,
        Err(Setup(reason)) => return CaseResult::Failed(reason),
    };

    match (outcome, &case.error) {
        (Ok(actual), None) => check_value(case, &ctx, actual),
        (Ok(actual), Some(code)) => CaseResult::Failed(format!(
            "expected {code} but got {}",
            compact(&actual.value)
        )),
        (Err(err), Some(code)) => check_error(case, &ctx, &err, code),
        (Err(err), None) => CaseResult::Failed(format!("unexpected error: {err}")),
    }
}

/// A malformed case, as opposed to an operation that failed.
struct Setup(String);

impl From<String> for Setup {
    fn from(reason: String) -> Self {
        Self(reason)
    }
}

struct Actual {
    value: Value,
    count: Option<usize>,
}

impl Actual {
    fn of(value: Value) -> Self {
        Self { value, count: None }
    }
}

fn execute(ctx: &mut Context, case: &Case) -> Result<Result<Actual, PregError>, Setup> {
    let outcome = match case.op {
        Op::Match => ctx
            .match_one(case.pattern()?, case.subject()?, case.match_flags()?, case.offset)
            .map(|row| Actual::of(to_value(&row))),
        Op::MatchAll => ctx
            .match_all(case.pattern()?, case.subject()?, case.match_flags()?, case.offset)
            .map(|found| Actual::of(to_value(&found))),
        Op::Replace => ctx
            .replace(
                case.pattern_arg()?,
                case.replacement_arg()?,
                case.subject_arg()?,
                case.limit.unwrap_or(-1),
            )
            .map(|replaced| Actual {
                value: to_value(&replaced.output),
                count: Some(replaced.count),
            }),
        Op::Split => ctx
            .split(
                case.pattern()?,
                case.subject()?,
                case.limit.unwrap_or(-1),
                case.split_flags()?,
            )
            .map(|pieces| Actual::of(to_value(&pieces))),
        Op::Grep => {
            let entries = case.entries()?;
            ctx.grep(case.pattern()?, entries, case.grep_flags()?)
                .map(|kept| {
                    let keyed: Map<String, Value> = kept
                        .into_iter()
                        .map(|(idx, entry)| (idx.to_string(), Value::from(entry.as_str())))
                        .collect();
                    Actual::of(Value::Object(keyed))
                })
        }
        Op::Quote => Ok(Actual::of(Value::from(quote(case.subject()?, case.delimiter)))),
    };
    Ok(outcome)
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| Value::String(format!("<unserializable: {err}>")))
}

fn check_value(case: &Case, ctx: &Context, actual: Actual) -> CaseResult {
    let Some(expected) = &case.expect else {
        return CaseResult::Failed("case has no expectation".into());
    };
    if *expected != actual.value {
        return CaseResult::Failed(format!(
            "expected {} but got {}",
            compact(expected),
            compact(&actual.value)
        ));
    }
    if let (Some(want), Some(got)) = (case.count, actual.count) {
        if want != got {
            return CaseResult::Failed(format!("expected count {want} but got {got}"));
        }
    }
    if case.op != Op::Quote && ctx.last_error_code() != ErrorCode::NoError {
        return CaseResult::Failed(format!(
            "succeeded but last error is {}",
            ctx.last_error_code()
        ));
    }
    CaseResult::Passed
}

fn check_error(case: &Case, ctx: &Context, err: &PregError, expected: &str) -> CaseResult {
    let got = match err.error_code() {
        Some(code) => code.name(),
        None => "argument",
    };
    if got != expected {
        return CaseResult::Failed(format!("expected {expected} but got {got}: {err}"));
    }
    if let Some(code) = err.error_code() {
        if ctx.last_error_code() != code || ctx.last_error_message() != err.to_string() {
            return CaseResult::Failed(format!(
                "error state not recorded: {} {}",
                ctx.last_error_code(),
                ctx.last_error_message()
            ));
        }
    }
    match &case.message {
        Some(needle) if !err.to_string().contains(needle.as_str()) => {
            CaseResult::Failed(format!("message {err:?} lacks {needle:?}"))
        }
        _ => CaseResult::Passed,
    }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::parse_cases;

    fn single(yaml: &str) -> CaseResult {
        let cases = parse_cases(yaml).expect("valid yaml");
        run_case(&cases[0])
    }

    #[test]
    fn passing_case() {
        let result = single(
            r#"
- name: digits
  op: match
  pattern: '/\d+/'
  subject: "ab 42"
  expect: {"0": "42"}
"#,
        );
        assert!(matches!(result, CaseResult::Passed), "{result:?}");
    }

    #[test]
    fn mismatch_is_reported() {
        let result = single(
            r#"
- name: wrong
  op: split
  pattern: '/,/'
  subject: "a,b"
  expect: ["a"]
"#,
        );
        let CaseResult::Failed(reason) = result else {
            panic!("expected failure");
        };
        assert_eq!(reason, r#"expected ["a"] but got ["a","b"]"#);
    }

    #[test]
    fn expected_errors_check_the_state() {
        let result = single(
            r#"
- name: eval
  op: match
  pattern: '/a/e'
  subject: a
  error: PREG_INTERNAL_ERROR
  message: no longer supported
"#,
        );
        assert!(matches!(result, CaseResult::Passed), "{result:?}");
    }

    #[test]
    fn malformed_cases_fail() {
        let result = single(
            r#"
- name: no subject
  op: match
  pattern: '/a/'
  expect: null
"#,
        );
        assert!(matches!(result, CaseResult::Failed(_)));

        let result = single(
            r#"
- name: both
  op: quote
  subject: a
  expect: a
  error: argument
"#,
        );
        assert!(matches!(result, CaseResult::Failed(_)));
    }

    #[test]
    fn skipped_cases_do_not_run() {
        let result = single(
            r#"
- name: later
  op: match
  skip: needs lookbehind
"#,
        );
        assert!(matches!(result, CaseResult::Skipped(reason) if reason == "needs lookbehind"));
    }
}
