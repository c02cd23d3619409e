//! JSON content documents.
//!
//! ```json
//! {
//!   "title": "The Water Cycle",
//!   "steps": [
//!     { "name": "Evaporation", "description": "Water turns into vapour..." }
//!   ]
//! }
//! ```
//!
//! The keys `titulo`, `etapas`, `nome` and `descricao` are accepted as
//! aliases so Portuguese-language documents load unchanged.

use serde_json::{Map, Value};

use super::{ContentModel, Step};
use crate::error::{ContentError, InvalidContent};
use crate::traits::ContentSource;

const TITLE_KEYS: [&str; 2] = ["title", "titulo"];
const STEPS_KEYS: [&str; 2] = ["steps", "etapas"];
const NAME_KEYS: [&str; 2] = ["name", "nome"];
const DESCRIPTION_KEYS: [&str; 2] = ["description", "descricao"];

/// Parse and validate a raw JSON document.
pub fn parse_document(raw: &str) -> Result<ContentModel, ContentError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(model_from_value(&value)?)
}

/// Load a document from `source` and validate it.
///
/// Failures are logged once here; the caller shows
/// [`ContentError::user_message`] and stops.
pub async fn load_content(source: &dyn ContentSource) -> Result<ContentModel, ContentError> {
    let origin = source.describe();
    let result = match source.fetch().await {
        Ok(raw) => parse_document(&raw),
        Err(err) => Err(err),
    };

    match &result {
        Ok(model) => tracing::info!(
            origin = %origin,
            steps = model.len(),
            "Loaded content \"{}\"",
            model.title()
        ),
        Err(err) => tracing::warn!(origin = %origin, code = err.error_code(), "{}", err),
    }
    result
}

fn model_from_value(value: &Value) -> Result<ContentModel, InvalidContent> {
    let object = value.as_object().ok_or(InvalidContent::NotAnObject)?;

    let title = lookup(object, &TITLE_KEYS)
        .and_then(Value::as_str)
        .map(str::to_string);

    let raw_steps = lookup(object, &STEPS_KEYS)
        .and_then(Value::as_array)
        .ok_or(InvalidContent::NotAList)?;

    let steps = raw_steps
        .iter()
        .enumerate()
        .map(|(index, raw)| step_from_value(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    ContentModel::new(title, steps)
}

fn step_from_value(index: usize, value: &Value) -> Result<Step, InvalidContent> {
    let object = value
        .as_object()
        .ok_or(InvalidContent::StepNotAnObject { index })?;

    let name = string_field(object, &NAME_KEYS).ok_or(InvalidContent::MissingField {
        index,
        field: "name",
    })?;
    let description =
        string_field(object, &DESCRIPTION_KEYS).ok_or(InvalidContent::MissingField {
            index,
            field: "description",
        })?;

    Ok(Step::new(name, description))
}

fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    lookup(object, keys)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryContent;

    #[test]
    fn test_parse_english_document() {
        let model = parse_document(
            r#"{"title":"Cycle","steps":[{"name":"A","description":"a"},{"name":"B","description":"b"}]}"#,
        )
        .unwrap();
        assert_eq!(model.title(), "Cycle");
        assert_eq!(model.len(), 2);
        assert_eq!(model.steps()[1], Step::new("B", "b"));
    }

    #[test]
    fn test_parse_portuguese_keys() {
        let model = parse_document(
            r#"{"titulo":"Ciclo","etapas":[{"nome":"Chuva","descricao":"A água cai."}]}"#,
        )
        .unwrap();
        assert_eq!(model.title(), "Ciclo");
        assert_eq!(model.steps()[0].name, "Chuva");
    }

    #[test]
    fn test_not_json() {
        let err = parse_document("{ nope").unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }

    #[test]
    fn test_not_an_object() {
        let err = parse_document("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid(InvalidContent::NotAnObject)
        ));
    }

    #[test]
    fn test_steps_not_list_shaped() {
        for raw in [r#"{"steps": {"name": "A"}}"#, r#"{"title": "x"}"#, r#"{"steps": "A,B"}"#] {
            let err = parse_document(raw).unwrap_err();
            assert!(
                matches!(err, ContentError::Invalid(InvalidContent::NotAList)),
                "{raw} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_steps() {
        let err = parse_document(r#"{"steps": []}"#).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(InvalidContent::Empty)));
    }

    #[test]
    fn test_step_missing_description() {
        let err =
            parse_document(r#"{"steps": [{"name":"A","description":"a"},{"name":"B"}]}"#)
                .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid(InvalidContent::MissingField {
                index: 1,
                field: "description"
            })
        ));
    }

    #[test]
    fn test_step_with_non_string_name() {
        let err = parse_document(r#"{"steps": [{"name": 4, "description": "a"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid(InvalidContent::MissingField {
                index: 0,
                field: "name"
            })
        ));
    }

    #[test]
    fn test_step_not_an_object() {
        let err = parse_document(r#"{"steps": ["A"]}"#).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid(InvalidContent::StepNotAnObject { index: 0 })
        ));
    }

    #[tokio::test]
    async fn test_load_content_from_source() {
        let source = InMemoryContent::new(r#"{"steps":[{"name":"A","description":"a"}]}"#);
        let model = load_content(&source).await.unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_load_content_propagates_fetch_failure() {
        let source = InMemoryContent::failing("disk on fire");
        let err = load_content(&source).await.unwrap_err();
        assert!(matches!(err, ContentError::Load { .. }));
    }
}
