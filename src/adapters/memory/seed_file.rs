//! Loads the initial catalog from a JSON seed file.
//!
//! Shape: a JSON array of decision sets (`id`, `title`, `description`, `levels`, `lastUsed?`, `createdAt`).
//! Read once at startup; never written back.

use crate::domain::samples::DEMO_ID;
use crate::domain::{Catalog, DecisionSet, DomainError};
use std::path::Path;
use tokio::fs;
use tracing::info;

pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Catalog, DomainError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::SeedFile(format!("read {}: {}", path.display(), e)))?;
    let sets: Vec<DecisionSet> = serde_json::from_str(&raw)
        .map_err(|e| DomainError::SeedFile(format!("parse {}: {}", path.display(), e)))?;

    let mut catalog = Catalog::default();
    for set in sets {
        // `/play/demo` always serves the built-in demo.
        if set.id == DEMO_ID {
            return Err(DomainError::SeedFile(format!(
                "id '{}' is reserved for the built-in demo",
                DEMO_ID
            )));
        }
        set.validate()
            .map_err(|e| DomainError::SeedFile(format!("set '{}': {}", set.id, e)))?;
        catalog = catalog
            .created(set)
            .map_err(|e| DomainError::SeedFile(e.to_string()))?;
    }

    info!(
        path = %path.display(),
        sets = catalog.len(),
        "loaded seed file"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[tokio::test]
    async fn loads_camel_case_sets() {
        let f = write_seed(
            r#"[
              {
                "id": "7",
                "title": "Weekend",
                "description": "Saturday plans",
                "levels": [
                  { "id": "7-1", "name": "Where", "options": ["Beach", "Mountains"] }
                ],
                "lastUsed": "Yesterday",
                "createdAt": "2024-02-03"
              },
              {
                "id": "8",
                "title": "Dinner",
                "description": "",
                "levels": [
                  { "id": "8-1", "name": "Cook", "options": ["Me", "You", "Takeout"] }
                ],
                "createdAt": "2024-02-04"
              }
            ]"#,
        );

        let catalog = load_seed_file(f.path()).await.unwrap();

        assert_eq!(catalog.len(), 2);
        let weekend = catalog.find("7").unwrap();
        assert_eq!(weekend.last_used.as_deref(), Some("Yesterday"));
        assert_eq!(weekend.levels[0].options, vec!["Beach", "Mountains"]);
        assert!(catalog.find("8").unwrap().last_used.is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let set = r#"{"id":"1","title":"A","description":"","levels":[{"id":"l","name":"L","options":["x"]}],"createdAt":"2024-01-01"}"#;
        let f = write_seed(&format!("[{},{}]", set, set));

        let err = load_seed_file(f.path()).await.unwrap_err();
        assert!(matches!(err, DomainError::SeedFile(msg) if msg.contains("already exists")));
    }

    #[tokio::test]
    async fn rejects_levels_without_options() {
        let f = write_seed(
            r#"[{"id":"1","title":"A","description":"","levels":[{"id":"l","name":"L","options":[]}],"createdAt":"2024-01-01"}]"#,
        );
        assert!(matches!(
            load_seed_file(f.path()).await,
            Err(DomainError::SeedFile(_))
        ));
    }

    #[tokio::test]
    async fn rejects_the_reserved_demo_id() {
        let f = write_seed(
            r#"[{"id":"demo","title":"Mine","description":"","levels":[{"id":"l","name":"L","options":["x","y"]}],"createdAt":"2024-01-01"}]"#,
        );
        let err = load_seed_file(f.path()).await.unwrap_err();
        assert!(matches!(err, DomainError::SeedFile(msg) if msg.contains("reserved")));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = load_seed_file("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, DomainError::SeedFile(_)));
    }
}
