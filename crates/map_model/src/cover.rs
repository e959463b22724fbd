//! Cover-page metadata for the ABNT export variant
//!
//! Collected by a small form outside the engine; the export only reads
//! these strings onto the cover page. The wire format accepts both the
//! form's Portuguese field names and the English ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverInfo {
    #[serde(alias = "nome")]
    pub author: String,
    #[serde(alias = "instituicao")]
    pub institution: String,
    #[serde(alias = "ano")]
    pub year: String,
    #[serde(alias = "titulo")]
    pub title: String,
}

impl CoverInfo {
    pub fn new(
        author: impl Into<String>,
        institution: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            institution: institution.into(),
            year: year.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_form_field_names() {
        let json = r#"{
            "nome": "Maria Silva",
            "instituicao": "Universidade Federal",
            "ano": "2025",
            "titulo": "Revolução Industrial"
        }"#;
        let info: CoverInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.author, "Maria Silva");
        assert_eq!(info.year, "2025");
    }

    #[test]
    fn accepts_english_field_names() {
        let json = r#"{"author": "A", "institution": "B", "year": "2024", "title": "T"}"#;
        let info: CoverInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.institution, "B");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let json = r#"{"titulo": "Só o título"}"#;
        let info: CoverInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title, "Só o título");
        assert!(info.year.is_empty());
    }
}
