//! Pipeline configuration.
//!
//! Everything heuristic lives here as data: the missing-token set, the
//! sampling constants, the date-name hints and the categorical mapping
//! tables. Stages receive their slice of this at construction time, so the
//! tables are testable and extensible without touching stage code.

/// A case-insensitive lookup table applied to columns matched by name.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    /// Column-name substrings this map applies to.
    pub name_hints: Vec<String>,
    /// Lowercased raw value -> canonical label.
    pub entries: Vec<(String, String)>,
    /// Whether unmapped values are kept lowercased (country style) or left
    /// exactly as they were (gender style).
    pub lowercase_unmapped: bool,
    /// A post-mapping value that collapses to the missing marker.
    pub missing_after: Option<String>,
}

impl CategoryMap {
    pub fn applies_to(&self, column_name: &str) -> bool {
        self.name_hints
            .iter()
            .any(|hint| column_name.contains(hint.as_str()))
    }

    /// Look up the canonical label for a raw value.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        let key = raw.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| to.as_str())
    }

    /// The fixed gender/sex domain. Unmapped values pass through untouched.
    pub fn gender() -> Self {
        let entries = [
            ("m", "Male"),
            ("male", "Male"),
            ("man", "Male"),
            ("f", "Female"),
            ("female", "Female"),
            ("woman", "Female"),
            ("other", "Other"),
            ("non-binary", "Other"),
            ("nb", "Other"),
        ];
        Self {
            name_hints: vec!["gender".into(), "sex".into()],
            entries: owned_entries(&entries),
            lowercase_unmapped: false,
            missing_after: None,
        }
    }

    /// The fixed country/nation domain. Unmapped values are lowercased and
    /// kept; a literal "nan" surviving the mapping becomes missing.
    pub fn country() -> Self {
        let entries = [
            ("us", "United States"),
            ("usa", "United States"),
            ("united states", "United States"),
            ("united states of america", "United States"),
            ("uk", "United Kingdom"),
            ("gb", "United Kingdom"),
            ("great britain", "United Kingdom"),
            ("india", "India"),
            ("in", "India"),
        ];
        Self {
            name_hints: vec!["country".into(), "nation".into()],
            entries: owned_entries(&entries),
            lowercase_unmapped: true,
            missing_after: Some("nan".into()),
        }
    }
}

fn owned_entries(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect()
}

/// Tunable knobs and data tables for the whole pipeline.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Textual tokens normalized to the missing marker (compared trimmed,
    /// case-insensitively).
    pub missing_tokens: Vec<String>,
    /// Columns with a missing fraction strictly above this are dropped.
    pub sparse_threshold: f64,
    /// How many non-missing values the numeric-likeness probe samples.
    pub numeric_sample_size: usize,
    /// Fraction of numeric-looking sampled values that triggers coercion.
    pub numeric_threshold: f64,
    /// Column-name substrings that mark a column as date-like.
    pub date_name_hints: Vec<String>,
    /// Lower clip percentile, as a fraction.
    pub clip_lower: f64,
    /// Upper clip percentile, as a fraction.
    pub clip_upper: f64,
    /// Categorical domains to standardize.
    pub category_maps: Vec<CategoryMap>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            missing_tokens: ["", "nan", "na", "n/a", "none", "null"]
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            sparse_threshold: 0.5,
            numeric_sample_size: 50,
            numeric_threshold: 0.6,
            date_name_hints: ["date", "dob", "birth", "joined", "join", "timestamp"]
                .iter()
                .map(|h| (*h).to_string())
                .collect(),
            clip_lower: 0.01,
            clip_upper: 0.99,
            category_maps: vec![CategoryMap::gender(), CategoryMap::country()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_map_matches_name_substrings() {
        let map = CategoryMap::gender();
        assert!(map.applies_to("gender"));
        assert!(map.applies_to("patient_sex"));
        assert!(!map.applies_to("age"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let map = CategoryMap::gender();
        assert_eq!(map.lookup("M"), Some("Male"));
        assert_eq!(map.lookup(" Non-Binary "), Some("Other"));
        assert_eq!(map.lookup("unknown"), None);
    }

    #[test]
    fn country_map_collapses_aliases() {
        let map = CategoryMap::country();
        assert_eq!(map.lookup("USA"), Some("United States"));
        assert_eq!(map.lookup("gb"), Some("United Kingdom"));
        assert_eq!(map.missing_after.as_deref(), Some("nan"));
    }
}
