//! JSON reports for evaluation outcomes

use serde_json::{json, Value};

use crate::evaluator::EvalError;
use crate::output::NumberPrinter;

/// Builds the JSON object printed by `--json`.
///
/// Success carries the numeric result plus its display form; NaN and
/// infinities have no JSON number, so `result` is `null` for them.
pub fn to_report(input: &str, outcome: &Result<f64, EvalError>, precision: Option<u32>) -> Value {
    match outcome {
        Ok(value) => json!({
            "input": input,
            "result": serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            "display": NumberPrinter::new(precision).print(*value),
        }),
        Err(e) => json!({
            "input": input,
            "error": e.kind().as_str(),
            "detail": e.detail(),
        }),
    }
}
