use anyhow::{Context, Result};
use jsonschema::validator_for;
use serde_json::Value;

/// A single point where the payload fails a schema constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub pointer: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = if self.pointer.is_empty() {
            "<root>"
        } else {
            &self.pointer
        };
        write!(f, "{location}: {}", self.message)
    }
}

#[derive(Debug)]
pub enum Verdict {
    Pass,
    Fail(Vec<Violation>),
}

/// Validate the payload against the schema, collecting violations in the
/// validator's own reporting order.
pub fn check_payload(schema: &Value, payload: &Value) -> Result<Verdict> {
    let validator = validator_for(schema).context("failed to compile JSON schema")?;
    if validator.is_valid(payload) {
        return Ok(Verdict::Pass);
    }
    let violations = validator
        .iter_errors(payload)
        .map(|error| Violation {
            pointer: error.instance_path.to_string(),
            message: error.to_string(),
        })
        .collect();
    Ok(Verdict::Fail(violations))
}
