//! Candidate document types for copytrace.
//!
//! A `Document` is one fetched candidate page considered as a possible
//! plagiarism source. `Metadata` carries the named page fields extracted
//! from its markup; a missing field is `None`, never an empty string or a
//! placeholder, so "absent" stays explicit in the model.

use serde::{Deserialize, Serialize};

/// Named metadata fields extracted from a candidate page.
///
/// All fields are optional. [`Metadata::completeness`] feeds the confidence
/// scorer's metadata bonus, so only genuinely present, non-empty values
/// count toward it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// `<meta name="description">` content.
    pub description: Option<String>,
    /// `<meta name="keywords">` content.
    pub keywords: Option<String>,
    /// `<meta name="author">` content.
    pub author: Option<String>,
    /// `<meta property="article:published_time">` content.
    pub published_date: Option<String>,
    /// `<meta property="article:modified_time">` content.
    pub last_modified: Option<String>,
    /// `<html lang>` attribute.
    pub language: Option<String>,
}

impl Metadata {
    /// Number of named fields in the model.
    pub const FIELD_COUNT: usize = 6;

    /// Fraction of fields that are present and non-empty, in [0, 1].
    pub fn completeness(&self) -> f64 {
        let fields = [
            &self.description,
            &self.keywords,
            &self.author,
            &self.published_date,
            &self.last_modified,
            &self.language,
        ];
        let present = fields
            .iter()
            .filter(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
            .count();
        present as f64 / Self::FIELD_COUNT as f64
    }
}

/// One fetched candidate page.
///
/// Produced by the search-and-fetch collaborator and consumed read-only by
/// the scoring pipeline; fetch failures are filtered out before documents
/// reach the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Page URL, the candidate's identity in the report.
    pub url: String,
    /// Page title (`Untitled` when the page has none).
    pub title: String,
    /// Search-result snippet, when the search surface provided one.
    pub snippet: Option<String>,
    /// Extracted body text; may be empty, which downstream scoring treats
    /// as a maximally-dissimilar document.
    pub raw_text: String,
    /// Extracted page metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metadata_has_zero_completeness() {
        assert_eq!(Metadata::default().completeness(), 0.0);
    }

    #[test]
    fn completeness_counts_only_present_fields() {
        let metadata = Metadata {
            description: Some("a study of geese".to_string()),
            keywords: None,
            author: Some("J. Doe".to_string()),
            published_date: None,
            last_modified: None,
            language: Some("en".to_string()),
        };
        assert!((metadata.completeness() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_string_does_not_count_as_present() {
        let metadata = Metadata {
            description: Some(String::new()),
            ..Metadata::default()
        };
        assert_eq!(metadata.completeness(), 0.0);
    }

    #[test]
    fn full_metadata_is_complete() {
        let metadata = Metadata {
            description: Some("d".into()),
            keywords: Some("k".into()),
            author: Some("a".into()),
            published_date: Some("2024-01-01".into()),
            last_modified: Some("2024-02-01".into()),
            language: Some("en".into()),
        };
        assert_eq!(metadata.completeness(), 1.0);
    }
}
