//! Integration tests for task file parsing

mod common;

use common::create_task_file;
use taskbranch::config::{parse_config, parse_config_file, FileFormat, StrategyKind};
use taskbranch::error::{ConfigError, TaskbranchError};
use taskbranch::runner::TaskSet;

#[test]
fn test_parse_complete_json_file() {
    let json = r#"{
  "dryRun": false,
  "interpreter": ["bash", "-c"],
  "tasks": [
    { "id": "fetch", "command": "git fetch" },
    {
      "id": "build",
      "command": "make",
      "dependsOn": ["fetch"],
      "condition": { "checkCommand": "uname", "expectedOutcome": "Linux" }
    },
    {
      "id": "deploy",
      "command": "make deploy",
      "dependsOn": ["build", "fetch"],
      "executeIf": "test -n \"$DEPLOY\""
    }
  ]
}"#;
    let (_dir, path) = create_task_file("taskbranch.json", json);
    let file = parse_config_file(&path).unwrap();

    assert_eq!(file.interpreter, Some(vec!["bash".to_string(), "-c".to_string()]));
    assert_eq!(file.tasks.len(), 3);

    let set = TaskSet::from_config(file);
    assert!(!set.dry_run);

    let build = set.find("build").unwrap();
    let condition = build.condition.as_ref().unwrap();
    assert_eq!(condition.check_command, "uname");
    assert_eq!(condition.expected_outcome, "Linux");

    let deploy = set.find("deploy").unwrap();
    assert_eq!(deploy.depends_on, vec!["build", "fetch"]);
    assert_eq!(deploy.execute_if.as_deref(), Some("test -n \"$DEPLOY\""));
}

#[test]
fn test_parse_yaml_file() {
    let yaml = r#"
dryRun: true
tasks:
  - id: lint
    command: cargo clippy
  - id: test
    command: cargo test
    dependsOn: [lint]
    strategy: shell
"#;
    let (_dir, path) = create_task_file("taskbranch.yml", yaml);
    let file = parse_config_file(&path).unwrap();

    assert!(file.dry_run);
    assert_eq!(file.tasks[1].strategy, Some(StrategyKind::Shell));
}

#[test]
fn test_tab_indented_json() {
    let json = "{\n\t\"tasks\": [\n\t\t{ \"id\": \"a\", \"command\": \"true\" }\n\t]\n}\n";
    let (_dir, path) = create_task_file("tasks.json", json);

    let file = parse_config_file(&path).unwrap();
    assert_eq!(file.tasks[0].id, "a");
}

#[test]
fn test_missing_fields_default() {
    let file = parse_config(r#"{ "tasks": [{ "id": "bare" }] }"#, FileFormat::Json).unwrap();
    let task = &file.tasks[0];

    assert_eq!(task.command, "");
    assert!(task.depends_on.is_empty());
    assert!(task.execute_if.is_none());
    assert!(task.condition.is_none());
    assert!(!file.dry_run);
}

#[test]
fn test_task_without_id_is_malformed() {
    let result = parse_config(r#"{ "tasks": [{ "command": "true" }] }"#, FileFormat::Json);
    assert!(matches!(result, Err(TaskbranchError::Json(_))));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let result = parse_config("tasks: [ { id: a", FileFormat::Yaml);
    assert!(matches!(result, Err(TaskbranchError::Yaml(_))));
}

#[test]
fn test_missing_file_reports_path() {
    let (dir, _path) = create_task_file("other.json", "{}");
    let missing = dir.path().join("taskbranch.json");

    match parse_config_file(&missing) {
        Err(TaskbranchError::Config(ConfigError::NotFound(shown))) => {
            assert!(shown.ends_with("taskbranch.json"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
