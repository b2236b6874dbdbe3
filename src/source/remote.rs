use super::control::SelectControl;
use super::records::records_to_options;
use crate::config::Options;
use crate::error::{DlbError, Result};
use crate::http;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// `uri` からレコード列を取得
///
/// HTTP(S) の場合は reqwest で取得し、それ以外はローカルファイルとして読む。
/// ペイロードは JSON 配列、またはオブジェクト（値の列として扱う）。
pub async fn fetch_records(client: &Client, uri: &str) -> Result<Vec<Value>> {
    let payload = if http::is_remote_uri(uri) {
        http::get_json(client, uri).await?
    } else {
        let content = std::fs::read_to_string(Path::new(uri))?;
        serde_json::from_str(&content)?
    };

    match payload {
        Value::Array(records) => Ok(records),
        Value::Object(map) => Ok(map.into_iter().map(|(_, v)| v).collect()),
        other => Err(DlbError::UnexpectedPayload {
            uri: uri.to_string(),
            message: format!("expected an array of records, got {}", json_kind(&other)),
        }),
    }
}

/// 設定に従って選択コントロールを用意する
///
/// - `use_remote_source = true`: `source_uri` のレコードを変換し、`name` のコントロールを作る
/// - `use_remote_source = false`: `source_uri` を選択コントロールの JSON として読む
pub async fn load_control(
    client: &Client,
    options: &Options,
    name: &str,
    preselected: &HashSet<String>,
) -> Result<SelectControl> {
    if options.use_remote_source {
        let records = fetch_records(client, &options.source_uri).await?;
        tracing::info!(uri = %options.source_uri, count = records.len(), "fetched records");
        let select_options =
            records_to_options(&records, &options.value_field, &options.text_field, preselected)?;
        Ok(SelectControl::new(name, select_options))
    } else {
        let mut control = SelectControl::load_from(Path::new(&options.source_uri))?;
        control.preselect(preselected);
        tracing::info!(
            path = %options.source_uri,
            count = control.options.len(),
            "loaded select control"
        );
        Ok(control)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
