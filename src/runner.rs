use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::check::{Verdict, check_payload};
use crate::io::load_document;

pub const VALID_BANNER: &str = "VALID: payload cumple el schema";
pub const INVALID_BANNER: &str = "INVALID: payload NO cumple el schema";
pub const LOAD_ERROR_PREFIX: &str = "Error leyendo archivos";

/// Outcome of one validation run, surfaced through the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Valid,
    Invalid,
    LoadFailure,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Valid => 0,
            RunStatus::Invalid => 1,
            RunStatus::LoadFailure => 2,
        }
    }
}

/// Load both documents, validate the payload against the schema, and print
/// the verdict. A load failure short-circuits before any validation and the
/// violation text is passed through from the validator verbatim.
pub fn run(schema_path: &Path, payload_path: &Path) -> Result<RunStatus> {
    let (schema, payload) = match load_inputs(schema_path, payload_path) {
        Ok(pair) => pair,
        Err(err) => {
            println!("{LOAD_ERROR_PREFIX}: {err:#}");
            return Ok(RunStatus::LoadFailure);
        }
    };

    match check_payload(&schema, &payload)? {
        Verdict::Pass => {
            println!("{VALID_BANNER}");
            Ok(RunStatus::Valid)
        }
        Verdict::Fail(violations) => {
            println!("{INVALID_BANNER}");
            for violation in &violations {
                println!("{violation}");
            }
            Ok(RunStatus::Invalid)
        }
    }
}

fn load_inputs(schema_path: &Path, payload_path: &Path) -> Result<(Value, Value)> {
    let schema = load_document(schema_path)?;
    let payload = load_document(payload_path)?;
    Ok((schema, payload))
}
