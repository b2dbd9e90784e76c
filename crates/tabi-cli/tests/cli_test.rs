//! Integration tests for the `tabi` binary.
//!
//! Each test runs the built binary with `XDG_CONFIG_HOME` pointed at its own
//! temp dir, so no user config leaks in.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tabi_core::markdown::parse_markdown;
use tabi_core::plan::{PlanFormat, TripPlan, parse_plan_str, render_plan};
use tabi_test_utils::{BASIC_PROMPT, full_standard_plan, okinawa_suggestion, write_file};

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn tabi(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabi"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("TABI_TEMPLATES")
        .env_remove("TABI_PROACTIVE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tabi")
}

fn tabi_with_stdin(config_home: &Path, args: &[&str], stdin: &str) -> Output {
    use std::io::Write;

    let mut child = Command::new(env!("CARGO_BIN_EXE_tabi"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tabi");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for tabi")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "tabi failed: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn plan_file(dir: &Path, name: &str, plan: &TripPlan, format: PlanFormat) -> String {
    let path = write_file(dir, name, &render_plan(plan, format).unwrap());
    path.display().to_string()
}

// -----------------------------------------------------------------------
// generate / parse
// -----------------------------------------------------------------------

#[test]
fn generate_then_parse_reproduces_plan() {
    let tmp = tempfile::TempDir::new().unwrap();
    let plan = full_standard_plan();
    let input = plan_file(tmp.path(), "trip.toml", &plan, PlanFormat::Toml);
    let prompt = tmp.path().join("prompt.md");
    let prompt = prompt.to_str().unwrap();

    let output = tabi(tmp.path(), &["generate", &input, "--output", prompt]);
    assert_success(&output);

    let output = tabi(tmp.path(), &["parse", prompt, "--format", "json"]);
    assert_success(&output);
    let parsed = parse_plan_str(&stdout(&output), PlanFormat::Json).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn generate_fills_empty_general_fields_from_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = write_file(tmp.path(), "trip.json", r#"{ "days": [ { "date": "2025-08-02" } ] }"#);
    let input = input.to_str().unwrap();

    let output = tabi(tmp.path(), &["generate", input]);
    assert_success(&output);
    let markdown = stdout(&output);
    assert!(markdown.contains("*   **出発地**：札幌\n"), "{markdown}");
    assert!(markdown.contains("*   **最優先事項**：節約志向\n"), "{markdown}");

    let output = tabi(tmp.path(), &["generate", input, "--no-defaults"]);
    assert_success(&output);
    assert!(stdout(&output).contains("*   **出発地**：\n"));
}

#[test]
fn generate_uses_config_file_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("tabi")).unwrap();
    write_file(
        &tmp.path().join("tabi"),
        "config.toml",
        "[defaults]\ndeparture = \"仙台\"\n\n[output]\nproactive_suggestions = true\n",
    );
    let input = write_file(tmp.path(), "trip.json", "{}");

    let output = tabi(tmp.path(), &["generate", input.to_str().unwrap()]);
    assert_success(&output);
    let markdown = stdout(&output);
    assert!(markdown.contains("*   **出発地**：仙台\n"), "{markdown}");
    assert!(markdown.contains("積極的に提案"), "proactive lines expected:\n{markdown}");
}

#[test]
fn generate_suggestion_plan() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = plan_file(tmp.path(), "okinawa.json", &okinawa_suggestion(), PlanFormat::Json);

    let output = tabi(tmp.path(), &["generate", &input]);
    assert_success(&output);
    let markdown = stdout(&output);
    assert!(markdown.starts_with("# ★★★ 行先提案モード ★★★\n"));
    assert_eq!(parse_markdown(&markdown).unwrap(), okinawa_suggestion());
}

#[test]
fn generate_with_custom_templates() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tabi(tmp.path(), &["templates"]);
    assert_success(&output);
    let templates = stdout(&output).replace("旅行プランの作成依頼", "Trip request");
    let templates = write_file(tmp.path(), "templates.toml", &templates);
    let input = plan_file(tmp.path(), "trip.toml", &full_standard_plan(), PlanFormat::Toml);

    let output = tabi(
        tmp.path(),
        &["generate", &input, "--templates", templates.to_str().unwrap()],
    );
    assert_success(&output);
    assert!(stdout(&output).starts_with("# Trip request\n"));
}

#[test]
fn generate_rejects_unknown_extension() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = write_file(tmp.path(), "trip.yaml", "general: {}\n");

    let output = tabi(tmp.path(), &["generate", input.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported plan file extension"), "{stderr}");
}

#[test]
fn parse_reads_stdin_and_writes_toml() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tabi_with_stdin(tmp.path(), &["parse", "-", "--format", "toml"], BASIC_PROMPT);
    assert_success(&output);

    let parsed = parse_plan_str(&stdout(&output), PlanFormat::Toml).unwrap();
    assert_eq!(parsed, parse_markdown(BASIC_PROMPT).unwrap());
}

#[test]
fn parse_rejects_empty_input() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tabi_with_stdin(tmp.path(), &["parse", "-"], "  \n");
    assert!(!output.status.success());
}

// -----------------------------------------------------------------------
// check
// -----------------------------------------------------------------------

#[test]
fn check_accepts_reference_prompt() {
    let tmp = tempfile::TempDir::new().unwrap();
    let prompt = write_file(tmp.path(), "basic.md", BASIC_PROMPT);

    let output = tabi(tmp.path(), &["check", prompt.to_str().unwrap()]);
    assert_success(&output);
    assert!(stdout(&output).contains("ok: round-trips"));
}

#[test]
fn check_flags_unrecognised_transport() {
    let tmp = tempfile::TempDir::new().unwrap();
    let prompt = write_file(
        tmp.path(),
        "bad.md",
        "### 旅行全体の基本情報\n*   **往路の交通情報**：新幹線で行く\n",
    );

    let output = tabi(tmp.path(), &["check", prompt.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("plan changes when regenerated"), "{stderr}");
}

// -----------------------------------------------------------------------
// init / templates / completions
// -----------------------------------------------------------------------

#[test]
fn init_writes_config_and_refuses_to_overwrite() {
    let tmp = tempfile::TempDir::new().unwrap();

    let output = tabi(tmp.path(), &["init"]);
    assert_success(&output);
    let config = std::fs::read_to_string(tmp.path().join("tabi").join("config.toml")).unwrap();
    assert!(config.contains("departure = \"札幌\""), "{config}");
    assert!(config.contains("proactive_suggestions = false"), "{config}");

    let output = tabi(tmp.path(), &["init"]);
    assert!(!output.status.success());

    let output = tabi(tmp.path(), &["init", "--force"]);
    assert_success(&output);
}

#[test]
fn templates_export_is_loadable() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("templates.toml");

    let output = tabi(tmp.path(), &["templates", "--output", path.to_str().unwrap()]);
    assert_success(&output);
    let loaded = tabi_core::markdown::TemplateSet::load(&path).unwrap();
    assert_eq!(loaded, tabi_core::markdown::TemplateSet::builtin());
}

#[test]
fn completions_for_bash() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tabi(tmp.path(), &["completions", "bash"]);
    assert_success(&output);
    assert!(stdout(&output).contains("tabi"));
}
