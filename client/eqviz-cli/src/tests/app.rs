use crate::CliError;
use crate::app::{api_config, default_report_path, read_password, render};

use eqviz_config::Config;

use std::io::Cursor;
use std::path::PathBuf;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_no_server_flag_when_api_config_then_config_value_kept() {
    let config = Config::default();

    let api = api_config(&config, None).unwrap();

    assert_that!(api.base_url, eq("http://localhost:8000/api"));
}

#[test]
fn given_server_flag_when_api_config_then_overrides_base_url() {
    let config = Config::default();

    let api = api_config(&config, Some("https://eqviz.example.com/api")).unwrap();

    assert_that!(api.base_url, eq("https://eqviz.example.com/api"));
}

#[test]
fn given_server_flag_without_scheme_when_api_config_then_rejected() {
    let config = Config::default();

    let result = api_config(&config, Some("eqviz.example.com"));

    assert!(matches!(result, Err(CliError::Config { .. })));
}

#[test]
fn given_password_line_when_read_then_newline_stripped() {
    let mut input = Cursor::new("secret123\r\n");

    let password = read_password(&mut input).unwrap();

    assert_that!(password, eq("secret123"));
}

#[test]
fn given_empty_input_when_read_password_then_input_error() {
    let mut input = Cursor::new("");

    let result = read_password(&mut input);

    assert!(matches!(result, Err(CliError::Input { .. })));
}

#[test]
fn given_dataset_id_when_default_report_path_then_named_after_id() {
    assert_that!(
        default_report_path(12),
        eq(&PathBuf::from("equipment_report_12.pdf"))
    );
}

#[test]
fn given_value_when_render_compact_then_single_line() {
    let value = json!({ "id": 1, "username": "bob" });

    let output = render(&value, false).unwrap();

    assert_that!(output, eq(r#"{"id":1,"username":"bob"}"#));
}

#[test]
fn given_value_when_render_pretty_then_indented() {
    let value = json!({ "id": 1 });

    let output = render(&value, true).unwrap();

    assert_that!(output, eq("{\n  \"id\": 1\n}"));
}
