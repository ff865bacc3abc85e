//! Task file parsing and discovery

use crate::config::types::TaskFile;
use crate::error::{ConfigError, ConfigResult, TaskbranchError};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default task file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["taskbranch.json", "taskbranch.yml", "taskbranch.yaml"];

/// Encoding of a task file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

/// Find the task file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the task file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(CONFIG_FILE_NAMES[0].to_string())),
        }
    }
}

/// Parse a task file from a path
pub fn parse_config_file(path: &Path) -> Result<TaskFile, TaskbranchError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TaskbranchError::from(ConfigError::NotFound(
            path.display().to_string(),
        )),
        _ => TaskbranchError::from(e),
    })?;

    parse_config(&contents, FileFormat::from_path(path))
}

/// Parse a task file from a string
pub fn parse_config(contents: &str, format: FileFormat) -> Result<TaskFile, TaskbranchError> {
    let file = match format {
        FileFormat::Json => serde_json::from_str(contents)?,
        FileFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(file)
}

/// Parse a task file with automatic discovery
pub fn parse_config_auto() -> Result<(TaskFile, PathBuf), TaskbranchError> {
    let config_path = find_config_file()?;
    let file = parse_config_file(&config_path)?;
    Ok((file, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_json() {
        let json = r#"{ "tasks": [{ "id": "a", "command": "true" }], "dryRun": true }"#;
        let file = parse_config(json, FileFormat::Json).unwrap();
        assert_eq!(file.tasks.len(), 1);
        assert!(file.dry_run);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
tasks:
  - id: a
    command: "true"
  - id: b
    command: "false"
    dependsOn: [a]
"#;
        let file = parse_config(yaml, FileFormat::Yaml).unwrap();
        assert_eq!(file.tasks.len(), 2);
        assert_eq!(file.tasks[1].depends_on, vec!["a"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("tasks.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("TASKS.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("tasks.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("tasks")), FileFormat::Yaml);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = parse_config(r#"{ "tasks": [ "#, FileFormat::Json);
        assert!(matches!(result, Err(TaskbranchError::Json(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("taskbranch.json");
        fs::write(&config_path, r#"{ "tasks": [] }"#).unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("taskbranch.yml");
        let sub_dir = temp_dir.path().join("subdir");

        fs::create_dir(&sub_dir).unwrap();
        fs::write(&config_path, "tasks: []\n").unwrap();

        let found = find_config_file_from(sub_dir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_json_preferred_over_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("taskbranch.json");
        fs::write(&json_path, r#"{ "tasks": [] }"#).unwrap();
        fs::write(temp_dir.path().join("taskbranch.yaml"), "tasks: []\n").unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, json_path);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = parse_config_file(&path);
        assert!(matches!(
            result,
            Err(TaskbranchError::Config(ConfigError::NotFound(_)))
        ));
    }
}
