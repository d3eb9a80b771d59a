pub mod output;

use crate::core::{Student, SurveyResponse};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents =
        read_file(path).with_context(|| format!("Failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {what} in {}", path.display()))
}

/// Load a JSON array of students.
pub fn load_roster(path: &Path) -> Result<Vec<Student>> {
    read_json(path, "roster")
}

/// Load a JSON array of survey responses.
pub fn load_responses(path: &Path) -> Result<Vec<SurveyResponse>> {
    read_json(path, "responses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_load_roster_and_responses() {
        let temp = TempDir::new().unwrap();
        let roster_path = temp.path().join("roster.json");
        let responses_path = temp.path().join("responses.json");
        write_file(
            &roster_path,
            indoc! {r#"
                [
                  {"id": "s-1", "name": "Juan", "grade": "6A"},
                  {"id": "s-2", "name": "María", "grade": "6A"}
                ]
            "#},
        )
        .unwrap();
        write_file(
            &responses_path,
            r#"[{"studentId": "s-1", "preferredPeers": ["s-2"], "climateRating": 4}]"#,
        )
        .unwrap();

        let roster = load_roster(&roster_path).unwrap();
        let responses = load_responses(&responses_path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].name, "María");
        assert_eq!(responses[0].preferred_peers.len(), 1);
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        write_file(&path, "[{").unwrap();

        let err = load_roster(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
