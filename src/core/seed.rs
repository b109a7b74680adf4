use std::path::Path;

use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a seed document: an ordered JSON array of task records.
pub fn parse(content: &str) -> Result<Vec<Task>, SeedError> {
    Ok(serde_json::from_str(content)?)
}

/// One read at startup; the store is never written back.
pub fn load(path: &Path) -> Result<Vec<Task>, SeedError> {
    parse(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_records_in_order() {
        let doc = r#"[
            {"title": "Buy milk", "description": "Two liters", "completed": true, "timestamp": "2026-08-01T09:30:00"},
            {"title": "Walk dog", "description": "Around the block", "completed": false, "timestamp": "2026-08-02T18:00:00"}
        ]"#;
        let tasks = parse(doc).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].title, "Walk dog");
        assert!(!tasks[1].completed);
        assert_eq!(tasks[0].display_updated(), "2026-08-01 09:30");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let doc = r#"[{"title": "Buy milk", "description": "Two liters"}]"#;
        let tasks = parse(doc).unwrap();
        assert!(!tasks[0].completed);
        // Each record is minted a fresh id on load.
        let again = parse(doc).unwrap();
        assert_ne!(tasks[0].id, again[0].id);
    }

    #[test]
    fn empty_document_seeds_an_empty_store() {
        assert!(parse("[]\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(parse("{not json"), Err(SeedError::Parse(_))));
    }
}
