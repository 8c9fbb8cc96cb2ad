//! Props shape validation.
//!
//! A block's props must have the shape its variant's default factory
//! produces: the same key set at every object level and the same value kind
//! at every position. Array elements are checked against the first element
//! of the default array; an empty default array accepts any elements.
//!
//! JSON has one number kind, so the structural pass cannot tell `1.5` or
//! `-1` from a count. [`check_typed`] closes that gap: props must also read
//! back into the variant's typed view, which is what the compiler renders.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreError;
use crate::models::Props;
use crate::props::{
    AccentProps, ChecklistProps, CodeProps, Columns2Props, Columns3Props, ComparisonProps,
    CountdownProps, FileProps, FlashcardsProps, FrameProps, ImageProps, KeytermProps,
    MatchingProps, PollProps, ProgressBarProps, QuizProps, RatingProps, SortableProps,
    SpacerProps, StatsCardProps, StepsProps, TableProps, TimelineProps, ToggleProps,
};
use crate::registry::Variant;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn check_object(
    expected: &serde_json::Map<String, Value>,
    actual: &serde_json::Map<String, Value>,
    path: &str,
) -> Result<(), (String, String)> {
    for key in expected.keys() {
        if !actual.contains_key(key) {
            return Err((join(path, key), "missing key".to_string()));
        }
    }
    for (key, value) in actual {
        match expected.get(key) {
            Some(exp) => check_value(exp, value, &join(path, key))?,
            None => return Err((join(path, key), "unexpected key".to_string())),
        }
    }
    Ok(())
}

fn check_value(expected: &Value, actual: &Value, path: &str) -> Result<(), (String, String)> {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => check_object(exp, act, path),
        (Value::Array(exp), Value::Array(act)) => match exp.first() {
            Some(template) => {
                for (i, item) in act.iter().enumerate() {
                    check_value(template, item, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            None => Ok(()),
        },
        _ if kind(expected) == kind(actual) => Ok(()),
        _ => Err((
            path.to_string(),
            format!("expected {}, found {}", kind(expected), kind(actual)),
        )),
    }
}

/// Deserialize `props` as `T`; on failure, name the first top-level key that
/// does not read on its own. Every typed view is `#[serde(default)]`, so a
/// single-key object is a complete value.
fn read_as<T: DeserializeOwned>(props: &Props) -> Result<(), (String, String)> {
    let whole = match serde_json::from_value::<T>(Value::Object(props.clone())) {
        Ok(_) => return Ok(()),
        Err(err) => err,
    };
    for (key, value) in props {
        let mut single = Props::new();
        single.insert(key.clone(), value.clone());
        if let Err(err) = serde_json::from_value::<T>(Value::Object(single)) {
            return Err((key.clone(), err.to_string()));
        }
    }
    Err((String::new(), whole.to_string()))
}

fn typed(variant: Variant, props: &Props) -> Result<(), (String, String)> {
    match variant {
        Variant::H1
        | Variant::H2
        | Variant::H3
        | Variant::Paragraph
        | Variant::Quote
        | Variant::Video
        | Variant::Audio
        | Variant::Embed
        | Variant::AudioNarrator
        | Variant::Divider => Ok(()),
        Variant::Callout | Variant::Note | Variant::HighlightBox => read_as::<AccentProps>(props),
        Variant::Codeblock => read_as::<CodeProps>(props),
        Variant::Image => read_as::<ImageProps>(props),
        Variant::File => read_as::<FileProps>(props),
        Variant::Spacer => read_as::<SpacerProps>(props),
        Variant::Columns2 => read_as::<Columns2Props>(props),
        Variant::Columns3 => read_as::<Columns3Props>(props),
        Variant::Quiz => read_as::<QuizProps>(props),
        Variant::Poll => read_as::<PollProps>(props),
        Variant::Checklist => read_as::<ChecklistProps>(props),
        Variant::Flashcards => read_as::<FlashcardsProps>(props),
        Variant::Sortable => read_as::<SortableProps>(props),
        Variant::Matching => read_as::<MatchingProps>(props),
        Variant::InteractiveTool | Variant::MiniApp => read_as::<FrameProps>(props),
        Variant::Table => read_as::<TableProps>(props),
        Variant::Toggle => read_as::<ToggleProps>(props),
        Variant::Timeline => read_as::<TimelineProps>(props),
        Variant::Steps => read_as::<StepsProps>(props),
        Variant::Keyterm => read_as::<KeytermProps>(props),
        Variant::ProgressBar => read_as::<ProgressBarProps>(props),
        Variant::Rating => read_as::<RatingProps>(props),
        Variant::Countdown => read_as::<CountdownProps>(props),
        Variant::StatsCard => read_as::<StatsCardProps>(props),
        Variant::Comparison => read_as::<ComparisonProps>(props),
    }
}

fn mismatch(variant: Variant) -> impl FnOnce((String, String)) -> CoreError {
    move |(path, detail)| CoreError::SchemaMismatch {
        variant: variant.tag().to_string(),
        path,
        detail,
    }
}

/// Check that `props` read into the typed view the compiler renders from.
///
/// Looser than [`check_props`]: missing keys read as defaults.
pub fn check_typed(variant: Variant, props: &Props) -> Result<(), CoreError> {
    typed(variant, props).map_err(mismatch(variant))
}

/// Check `props` against the default shape of `variant`, then against its
/// typed view
pub fn check_props(variant: Variant, props: &Props) -> Result<(), CoreError> {
    let (_, expected) = variant.defaults();
    check_object(&expected, props, "").map_err(mismatch(variant))?;
    check_typed(variant, props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_match_their_own_shape() {
        for variant in Variant::ALL {
            let (_, defaults) = variant.defaults();
            assert!(check_props(variant, &defaults).is_ok(), "{}", variant.tag());
        }
    }

    #[test]
    fn test_missing_key_is_reported() {
        let err = check_props(Variant::Rating, &props(json!({ "max": 5, "value": 1 }))).unwrap_err();
        assert_eq!(
            err,
            CoreError::SchemaMismatch {
                variant: "rating".into(),
                path: "type".into(),
                detail: "missing key".into(),
            }
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"Props of `rating` block do not match its schema at `type`: missing key"
        );
    }

    #[test]
    fn test_nested_kind_mismatch_path() {
        let bad = props(json!({
            "options": [
                { "id": "a", "text": "A", "isCorrect": true, "explanation": "" },
                { "id": "b", "text": "B", "isCorrect": "yes", "explanation": "" }
            ],
            "feedback": { "correct": "", "incorrect": "" },
            "points": 1
        }));
        match check_props(Variant::Quiz, &bad) {
            Err(CoreError::SchemaMismatch { path, .. }) => assert_eq!(path, "options[1].isCorrect"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_props_variant_rejects_extra_keys() {
        assert!(check_props(Variant::Divider, &Props::new()).is_ok());
        assert!(check_props(Variant::Divider, &props(json!({ "x": 1 }))).is_err());
    }

    #[test]
    fn test_counts_must_be_whole_and_non_negative() {
        let mut quiz = Variant::Quiz.defaults().1;
        quiz.insert("points".into(), json!(1.5));
        match check_props(Variant::Quiz, &quiz) {
            Err(CoreError::SchemaMismatch { path, detail, .. }) => {
                assert_eq!(path, "points");
                assert!(detail.contains("1.5"), "{detail}");
            }
            other => panic!("unexpected {other:?}"),
        }

        let rating = props(json!({ "max": -1, "value": 0, "type": "stars" }));
        match check_props(Variant::Rating, &rating) {
            Err(CoreError::SchemaMismatch { path, .. }) => assert_eq!(path, "max"),
            other => panic!("unexpected {other:?}"),
        }

        let poll = props(json!({ "options": ["a"], "votes": [0.5] }));
        assert!(check_props(Variant::Poll, &poll).is_err());
    }

    #[test]
    fn test_typed_check_allows_missing_keys() {
        assert!(check_typed(Variant::Rating, &props(json!({ "value": 2 }))).is_ok());
        assert!(check_typed(Variant::Rating, &props(json!({ "value": "2" }))).is_err());
        assert!(check_typed(Variant::Divider, &props(json!({ "anything": 1 }))).is_ok());
    }

    #[test]
    fn test_numbers_are_one_kind() {
        let ok = props(json!({ "value": 12.5, "max": 40, "showLabel": false, "color": "green" }));
        assert!(check_props(Variant::ProgressBar, &ok).is_ok());
    }
}
