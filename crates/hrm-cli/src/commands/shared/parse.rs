use std::path::Path;

use anyhow::Context;
use hrm_core::enums::EntityType;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Resolve an entity type from `job-posting`, `job_posting` or `jobPosting`.
pub fn parse_entity_type(raw: &str) -> Result<EntityType, String> {
    let wanted = fold(raw);
    EntityType::ALL
        .into_iter()
        .find(|t| fold(t.as_str()) == wanted)
        .ok_or_else(|| format!("unknown entity type '{raw}'"))
}

/// Like [`parse_entity_type`], restricted to types with a generic repository.
pub fn parse_record_type(raw: &str) -> Result<EntityType, String> {
    match parse_entity_type(raw)? {
        EntityType::User | EntityType::Admin => Err(format!(
            "'{raw}' is an account type; use `hrm account` instead"
        )),
        record => Ok(record),
    }
}

fn fold(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Read a `--data` argument: inline JSON, or `@path` naming a JSON file.
///
/// Only objects are accepted; the entity's draft or patch type does the rest.
pub fn read_json_body(raw: &str) -> anyhow::Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read --data file '{path}'"))?,
        None => raw.to_string(),
    };
    let value: Value = serde_json::from_str(&text).context("--data is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("--data must be a JSON object");
    }
    Ok(value)
}

/// Deserialize a JSON body into a draft or patch, naming the entity on failure.
pub fn parse_body<T>(body: Value, entity: EntityType) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(body).with_context(|| format!("invalid {} data", entity.as_str()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use hrm_core::enums::AuditAction;
    use hrm_core::entities::KpiDraft;
    use hrm_db::updates::FaqPatch;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let action: AuditAction = parse_enum("update", "action").expect("action should parse");
        assert_eq!(action, AuditAction::Update);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<AuditAction>("upsert", "action").expect_err("should fail");
        assert!(err.to_string().contains("invalid action 'upsert'"));
    }

    #[test]
    fn entity_type_spellings() {
        assert_eq!(parse_entity_type("kpi-snapshot"), Ok(EntityType::KpiSnapshot));
        assert_eq!(parse_entity_type("selectionStep"), Ok(EntityType::SelectionStep));
        assert_eq!(parse_entity_type("FAQ"), Ok(EntityType::Faq));
        assert!(parse_entity_type("invoice").is_err());
    }

    #[test]
    fn account_types_are_not_records() {
        let err = parse_record_type("admin").expect_err("admin has no generic repository");
        assert!(err.contains("hrm account"));
        assert_eq!(parse_entity_type("admin"), Ok(EntityType::Admin));
    }

    #[test]
    fn inline_body_must_be_object() {
        assert_eq!(
            read_json_body(r#"{"question": "q"}"#).unwrap(),
            json!({"question": "q"})
        );
        assert!(read_json_body("[1, 2]").is_err());
        assert!(read_json_body("{not json").is_err());
    }

    #[test]
    fn body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"answer": "yes"}}"#).unwrap();
        let arg = format!("@{}", file.path().display());
        assert_eq!(read_json_body(&arg).unwrap(), json!({"answer": "yes"}));
    }

    #[test]
    fn body_errors_name_the_entity() {
        let err = parse_body::<FaqPatch>(json!({"question": 5}), EntityType::Faq)
            .expect_err("number is not a question");
        assert!(format!("{err:#}").contains("invalid faq data"));
    }

    #[test]
    fn structured_body_field_must_not_be_a_string() {
        let body = json!({
            "periodStart": "2024-01-01",
            "periodEnd": "2024-03-31",
            "phaseData": "{\"a\":1}",
        });
        let err = parse_body::<KpiDraft>(body, EntityType::Kpi)
            .expect_err("string-encoded phaseData is not a phase list");
        assert!(format!("{err:#}").contains("invalid kpi data"));
    }
}
