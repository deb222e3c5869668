//! Canonical column naming.
//!
//! Canonical form: lowercase, ASCII alphanumerics and underscores only,
//! internal whitespace collapsed to single underscores. Names that come out
//! empty or collide after canonicalization are disambiguated here so the
//! table always carries unique, non-empty identifiers.

use std::collections::HashSet;

/// Canonicalize a single raw header.
pub fn canonical_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut joined = String::with_capacity(lowered.len());
    for (idx, part) in lowered.split_whitespace().enumerate() {
        if idx > 0 {
            joined.push('_');
        }
        joined.push_str(part);
    }
    joined.retain(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    joined
}

/// Canonicalize a full header row, resolving empties and collisions.
///
/// Empty results become `column_<position>`; later duplicates get a numeric
/// suffix (`age`, `age_2`, `age_3`, ...). Positions are 1-based to match how
/// people count spreadsheet columns.
pub fn canonical_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut result = Vec::with_capacity(raw.len());
    for (idx, header) in raw.iter().enumerate() {
        let mut name = canonical_name(header.as_ref());
        if name.is_empty() {
            name = format!("column_{}", idx + 1);
        }
        if taken.contains(&name) {
            let mut suffix = 2usize;
            while taken.contains(&format!("{name}_{suffix}")) {
                suffix += 1;
            }
            name = format!("{name}_{suffix}");
        }
        taken.insert(name.clone());
        result.push(name);
    }
    result
}
