//! Site catalog parsing and CSV flattening.
//!
//! The catalog is a JSON array of records, each wrapping a `site` object.
//! Field lookups are best-effort: missing strings default to empty and
//! missing counts to zero. Count keys are kebab-case on the wire but
//! serialize to snake_case columns for the CSV export.

use serde::{Deserialize, Serialize};

/// One catalog record wrapping a site object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// The wrapped site record.
    pub site: SiteRecord,
}

/// A published textbook site described by the catalog.
///
/// Serialization order doubles as the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRecord {
    /// Display name of the site.
    pub name: String,
    /// Source repository URL.
    pub github_repo: String,
    /// Published site URL.
    pub site_url: String,
    /// Free-text description.
    pub description: String,
    /// Catalog status marker.
    pub status: String,
    /// Previously computed markdown file count.
    #[serde(rename(deserialize = "markdown-file-count"))]
    pub markdown_file_count: u64,
    /// Previously computed image count.
    #[serde(rename(deserialize = "image-count"))]
    pub image_count: u64,
    /// Previously computed word count.
    #[serde(rename(deserialize = "word-count"))]
    pub word_count: u64,
    /// Previously computed simulation count.
    #[serde(rename(deserialize = "microsim-count"))]
    pub microsim_count: u64,
    /// Previously computed glossary term count.
    #[serde(rename(deserialize = "glossary-term-count"))]
    pub glossary_term_count: u64,
}

/// Parse catalog JSON into site records, preserving order.
pub fn parse_catalog(contents: &str) -> Result<Vec<SiteRecord>, serde_json::Error> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(contents)?;
    Ok(entries.into_iter().map(|entry| entry.site).collect())
}

#[cfg(test)]
mod tests {
    use super::parse_catalog;

    #[test]
    fn parses_records_with_all_fields() {
        let json = r#"[
            {"site": {
                "name": "Graph Algorithms",
                "github_repo": "https://github.com/org/graph-algos",
                "site_url": "https://org.github.io/graph-algos/",
                "description": "An interactive textbook.",
                "status": "active",
                "markdown-file-count": 42,
                "image-count": 7,
                "word-count": 12345,
                "microsim-count": 3,
                "glossary-term-count": 58
            }}
        ]"#;

        let records = parse_catalog(json).expect("parse");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Graph Algorithms");
        assert_eq!(record.markdown_file_count, 42);
        assert_eq!(record.microsim_count, 3);
        assert_eq!(record.glossary_term_count, 58);
    }

    #[test]
    fn missing_fields_default_and_order_is_preserved() {
        let json = r#"[
            {"site": {"name": "Second"}},
            {"site": {"name": "First", "word-count": 10}},
            {}
        ]"#;

        let records = parse_catalog(json).expect("parse");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Second");
        assert_eq!(records[0].word_count, 0);
        assert_eq!(records[0].github_repo, "");
        assert_eq!(records[1].name, "First");
        assert_eq!(records[1].word_count, 10);
        assert_eq!(records[2].name, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"[{"site": {"name": "Demo", "stars": 99}, "extra": true}]"#;
        let records = parse_catalog(json).expect("parse");
        assert_eq!(records[0].name, "Demo");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"site": {}}"#).is_err());
    }

    #[test]
    fn serializes_with_snake_case_columns() {
        let mut record = super::SiteRecord::default();
        record.name = "Demo".to_string();
        record.word_count = 5;
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"word_count\":5"));
        assert!(json.contains("\"microsim_count\":0"));
    }
}
