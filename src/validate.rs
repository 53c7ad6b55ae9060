// Optional schema validation of the written document.
//
// Validation runs after the file exists on disk and is gated on the schema
// resource being present, so "no schema available" stays distinct from
// "document does not conform".

use crate::error::Result;
use jsonschema::JSONSchema;
use std::fs;
use std::path::Path;

/// Three-valued validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The document conforms to the schema.
    Passed,
    /// The document violates the schema; the string names the first failing
    /// constraint and its location.
    Failed(String),
    /// No schema resource was found, validation did not run.
    Skipped,
}

/// Checks a parsed document against a parsed schema.
pub fn validate_value(doc: &serde_json::Value, schema: &serde_json::Value) -> ValidationOutcome {
    let compiled = match JSONSchema::compile(schema) {
        Ok(compiled) => compiled,
        Err(e) => return ValidationOutcome::Failed(format!("schema did not compile: {}", e)),
    };

    let outcome = match compiled.validate(doc) {
        Ok(()) => ValidationOutcome::Passed,
        Err(mut errors) => match errors.next() {
            Some(e) => {
                ValidationOutcome::Failed(format!("{} (at instance path {})", e, e.instance_path))
            }
            None => ValidationOutcome::Passed,
        },
    };
    outcome
}

/// Validates a written document file against a schema file, skipping when
/// the schema resource is absent.
pub fn validate_file(document_path: &Path, schema_path: &Path) -> Result<ValidationOutcome> {
    if !schema_path.is_file() {
        return Ok(ValidationOutcome::Skipped);
    }

    let schema: serde_json::Value = serde_json::from_str(&fs::read_to_string(schema_path)?)?;
    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(document_path)?)?;
    Ok(validate_value(&doc, &schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mini_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["metadata", "units", "data"],
            "properties": {
                "data": { "type": "array" }
            }
        })
    }

    #[test]
    fn test_validate_value_passes_conformant_document() {
        let doc = json!({
            "metadata": { "who": "wcon-export" },
            "units": { "t": "s" },
            "data": []
        });
        assert_eq!(validate_value(&doc, &mini_schema()), ValidationOutcome::Passed);
    }

    #[test]
    fn test_validate_value_reports_first_violation() {
        // data has the wrong type
        let doc = json!({
            "metadata": {},
            "units": {},
            "data": "not-an-array"
        });
        match validate_value(&doc, &mini_schema()) {
            ValidationOutcome::Failed(reason) => assert!(reason.contains("/data")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_file_skips_when_schema_absent() {
        let outcome = validate_file(
            Path::new("whatever.wcon"),
            Path::new("definitely-not-here/wcon_schema.json"),
        )
        .unwrap();
        assert_eq!(outcome, ValidationOutcome::Skipped);
    }
}
