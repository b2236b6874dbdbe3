use super::control::SelectOption;
use crate::config::TextField;
use crate::error::{DlbError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// レコード列を選択肢に変換する
///
/// - `value_field` が無い、または null のレコードはエラー
/// - 複合 `text_field` は各フィールドを空白 1 つで連結する
/// - 値が `preselected` に含まれるレコードは選択状態になる
pub fn records_to_options(
    records: &[Value],
    value_field: &str,
    text_field: &TextField,
    preselected: &HashSet<String>,
) -> Result<Vec<SelectOption>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Object(map) = record else {
                return Err(DlbError::InvalidRecord {
                    index,
                    message: "expected a JSON object".to_string(),
                });
            };

            let value = match map.get(value_field) {
                None | Some(Value::Null) => {
                    return Err(DlbError::InvalidRecord {
                        index,
                        message: format!("missing value field '{}'", value_field),
                    });
                }
                Some(v) => scalar_to_string(v).ok_or_else(|| DlbError::InvalidRecord {
                    index,
                    message: format!("value field '{}' is not a scalar", value_field),
                })?,
            };

            let mut parts = Vec::with_capacity(text_field.fields().len());
            for field in text_field.fields() {
                let part = match map.get(field) {
                    None | Some(Value::Null) => String::new(),
                    Some(v) => scalar_to_string(v).ok_or_else(|| DlbError::InvalidRecord {
                        index,
                        message: format!("text field '{}' is not a scalar", field),
                    })?,
                };
                parts.push(part);
            }
            let text = parts.join(" ");

            let selected = preselected.contains(&value);
            Ok(SelectOption::new(value, text).with_selected(selected))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
