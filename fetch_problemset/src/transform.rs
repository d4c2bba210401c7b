//! 在投影成强类型结构之前，对通用 JSON 树做的改写

use crate::error::{FetchError, Result};
use log::trace;
use serde_json::Value;

/// 按路径取出子树（取走所有权），缺失或为 null 视为错误
pub fn take_path(mut value: Value, path: &[&str]) -> Result<Value> {
    for (depth, key) in path.iter().enumerate() {
        value = match value.get_mut(*key).map(Value::take) {
            Some(Value::Null) | None => {
                return Err(FetchError::MissingField(path[..=depth].join(".")));
            }
            Some(child) => child,
        };
    }
    Ok(value)
}

/// 把以 JSON 字符串形式返回的字段解析成结构化的值
///
/// 字段缺失、为 null 或已经是结构化值时保持不变。
pub fn decode_embedded_json(object: &mut Value, field: &str) -> Result<()> {
    let Some(slot) = object.get_mut(field) else {
        return Ok(());
    };
    if let Some(encoded) = slot.as_str() {
        trace!("解析内嵌 JSON 字段: field={}", field);
        let decoded: Value = serde_json::from_str(encoded)?;
        *slot = decoded;
    }
    Ok(())
}

/// 把 `object[parent][field]` 提升为 `object[field]`
pub fn hoist_field(object: &mut Value, parent: &str, field: &str) -> Result<()> {
    let hoisted = object
        .get(parent)
        .and_then(|p| p.get(field))
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or_else(|| FetchError::MissingField(format!("{}.{}", parent, field)))?;

    match object {
        Value::Object(map) => {
            map.insert(field.to_string(), hoisted);
            Ok(())
        }
        _ => Err(FetchError::MissingField(parent.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn take_path_walks_nested_objects() {
        let body = json!({ "data": { "question": { "title": "Two Sum" } } });
        let question = take_path(body, &["data", "question"]).unwrap();
        assert_eq!(question, json!({ "title": "Two Sum" }));
    }

    #[test]
    fn take_path_reports_first_missing_segment() {
        let body = json!({ "data": { "question": null } });
        let err = take_path(body, &["data", "question", "title"]).unwrap_err();
        assert!(matches!(err, FetchError::MissingField(p) if p == "data.question"));

        let err = take_path(json!({ "errors": [] }), &["data", "question"]).unwrap_err();
        assert!(matches!(err, FetchError::MissingField(p) if p == "data"));
    }

    #[test]
    fn decode_embedded_json_parses_string_fields() {
        let mut question = json!({
            "similarQuestions": "[{\"title\": \"3Sum\", \"titleSlug\": \"3sum\"}]",
            "stats": "{\"totalAcceptedRaw\": 5, \"acRate\": \"50.0%\"}",
        });

        decode_embedded_json(&mut question, "similarQuestions").unwrap();
        decode_embedded_json(&mut question, "stats").unwrap();

        assert_eq!(
            question["similarQuestions"],
            json!([{ "title": "3Sum", "titleSlug": "3sum" }])
        );
        assert_eq!(
            question["stats"],
            json!({ "totalAcceptedRaw": 5, "acRate": "50.0%" })
        );
    }

    #[test]
    fn decode_embedded_json_leaves_other_values_alone() {
        let mut question = json!({ "stats": { "acRate": "1%" }, "hints": null });
        decode_embedded_json(&mut question, "stats").unwrap();
        decode_embedded_json(&mut question, "hints").unwrap();
        decode_embedded_json(&mut question, "absent").unwrap();
        assert_eq!(question, json!({ "stats": { "acRate": "1%" }, "hints": null }));
    }

    #[test]
    fn decode_embedded_json_rejects_malformed_string() {
        let mut question = json!({ "stats": "{not json" });
        let err = decode_embedded_json(&mut question, "stats").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn hoist_field_copies_nested_value_up() {
        let mut article = json!({
            "slug": "hash-map",
            "question": { "questionTitleSlug": "two-sum" }
        });
        hoist_field(&mut article, "question", "questionTitleSlug").unwrap();
        assert_eq!(article["questionTitleSlug"], json!("two-sum"));
    }

    #[test]
    fn hoist_field_requires_nested_value() {
        let mut article = json!({ "slug": "hash-map", "question": null });
        let err = hoist_field(&mut article, "question", "questionTitleSlug").unwrap_err();
        assert!(matches!(err, FetchError::MissingField(p) if p == "question.questionTitleSlug"));
    }
}
