//! Subprocess invocation of the `ziti` CLI.
//!
//! All ziti access goes through `run_ziti()`: locate the binary on PATH,
//! run it with stdout captured, and surface non-zero exits with a truncated
//! stderr hint. `ziti_list()` layers the `-j` JSON list protocol on top and
//! hands back the elements of the response's top-level `data` array.

use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::ZitiError;

/// Locate the `ziti` binary on PATH.
pub fn ziti_binary() -> Result<std::path::PathBuf, ZitiError> {
    which::which("ziti").map_err(|_| ZitiError::BinaryNotFound)
}

/// Run `ziti` with the given arguments and return its stdout.
///
/// Stderr is captured and folded into the error on a non-zero exit; on
/// success it is discarded (the list protocol only speaks on stdout).
pub fn run_ziti(args: &[String]) -> Result<String, ZitiError> {
    let binary = ziti_binary()?;

    let output = Command::new(&binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ZitiError::Spawn(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let hint = stderr.chars().take(500).collect::<String>();
        return Err(ZitiError::CommandFailed {
            args: args.join(" "),
            code: output.status.code().unwrap_or(-1),
            hint,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// List entities: `ziti <api> list <entity_type> [filter] -j`, parsed into
/// the records of the response's `data` array.
pub fn ziti_list(api: &str, entity_type: &str, filter: &str) -> Result<Vec<Value>, ZitiError> {
    let args = build_list_args(api, entity_type, filter);
    let raw = run_ziti(&args)?;
    parse_list_output(&raw)
}

/// String field accessor with the wrapper semantics the templates expect:
/// a missing or non-string field reads as the empty string.
pub fn entity_str<'a>(entity: &'a Value, key: &str) -> &'a str {
    entity.get(key).and_then(Value::as_str).unwrap_or("")
}

pub(crate) fn build_list_args(api: &str, entity_type: &str, filter: &str) -> Vec<String> {
    let mut args = vec![api.to_string(), "list".to_string(), entity_type.to_string()];
    if !filter.is_empty() {
        args.push(filter.to_string());
    }
    args.push("-j".to_string());
    args
}

pub(crate) fn parse_list_output(raw: &str) -> Result<Vec<Value>, ZitiError> {
    let parsed: Value = serde_json::from_str(raw)?;
    match parsed.get("data") {
        Some(Value::Array(items)) => Ok(items.clone()),
        // Single-entity endpoints return a bare object under `data`.
        Some(obj @ Value::Object(_)) => Ok(vec![obj.clone()]),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_args_include_filter_before_json_flag() {
        assert_eq!(
            build_list_args("edge", "services", "name contains \"demo\""),
            vec!["edge", "list", "services", "name contains \"demo\"", "-j"]
        );
    }

    #[test]
    fn list_args_omit_empty_filter() {
        assert_eq!(
            build_list_args("edge", "edge-routers", ""),
            vec!["edge", "list", "edge-routers", "-j"]
        );
    }

    #[test]
    fn parses_data_array() {
        let raw = json!({
            "data": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
            "meta": {"pagination": {"totalCount": 2}}
        })
        .to_string();
        let entities = parse_list_output(&raw).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entity_str(&entities[0], "id"), "a");
        assert_eq!(entity_str(&entities[1], "name"), "B");
    }

    #[test]
    fn missing_or_null_data_is_empty() {
        assert!(parse_list_output("{\"meta\":{}}").unwrap().is_empty());
        assert!(parse_list_output("{\"data\":null}").unwrap().is_empty());
    }

    #[test]
    fn bare_object_data_becomes_single_entity() {
        let raw = json!({"data": {"id": "a", "name": "A"}}).to_string();
        let entities = parse_list_output(&raw).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entity_str(&entities[0], "id"), "a");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_list_output("not json"),
            Err(ZitiError::Json(_))
        ));
    }

    #[test]
    fn entity_str_defaults_to_empty() {
        let entity = json!({"id": 7});
        assert_eq!(entity_str(&entity, "id"), "");
        assert_eq!(entity_str(&entity, "name"), "");
    }
}
