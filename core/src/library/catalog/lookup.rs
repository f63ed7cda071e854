//! Finding a catalog entry from what the user typed
//!
//! Queries are tried against, in order: source paths, exact titles,
//! titles ignoring case, then title prefixes ignoring case. The first step
//! with any hit decides the result.
//!
//! The catalog keeps duplicates, so one title can belong to several
//! entries (an imported copy of a bundled game, say). When every hit shares
//! one title the earliest entry wins, which puts private storage ahead of
//! bundled assets. Hits with different titles are ambiguous.

use super::{Catalog, CatalogEntry};

/// Why a query did not pick out a single entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No title given")]
    EmptyQuery,

    /// Nothing matched; `suggestions` holds titles within a few edits.
    #[error("No game matches '{query}'")]
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },

    /// Several different titles start with the query.
    #[error("'{query}' matches several games")]
    Ambiguous { query: String, titles: Vec<String> },
}

impl Catalog {
    /// Find the entry a query refers to.
    pub fn lookup(&self, query: &str) -> Result<&CatalogEntry, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        if let Some(entry) = self.find_by_source(query) {
            return Ok(entry);
        }

        let folded = query.to_lowercase();
        let steps: [&dyn Fn(&CatalogEntry) -> bool; 3] = [
            &|e: &CatalogEntry| e.display_name == query,
            &|e: &CatalogEntry| e.display_name.to_lowercase() == folded,
            &|e: &CatalogEntry| e.display_name.to_lowercase().starts_with(&folded),
        ];

        for step in steps {
            let hits: Vec<&CatalogEntry> = self.iter().filter(|e| step(*e)).collect();
            if !hits.is_empty() {
                return pick(query, &hits);
            }
        }

        Err(LookupError::NotFound {
            query: query.to_string(),
            suggestions: self.near_titles(&folded),
        })
    }

    /// Distinct titles close to `folded`, nearest first, at most three.
    fn near_titles(&self, folded: &str) -> Vec<String> {
        let limit = (folded.chars().count() / 3).max(2);
        let mut near: Vec<(usize, &str)> = Vec::new();
        for entry in self {
            let title = entry.display_name.as_str();
            if near.iter().any(|(_, seen)| *seen == title) {
                continue;
            }
            let distance = edit_distance(folded, &title.to_lowercase());
            if distance <= limit {
                near.push((distance, title));
            }
        }
        near.sort_by_key(|(distance, _)| *distance);
        near.into_iter()
            .take(3)
            .map(|(_, title)| title.to_string())
            .collect()
    }
}

/// Resolve one step's hits: duplicates of a single title collapse to the
/// first entry, anything else is ambiguous.
fn pick<'a>(query: &str, hits: &[&'a CatalogEntry]) -> Result<&'a CatalogEntry, LookupError> {
    let first = hits[0];
    let mut titles: Vec<String> = Vec::new();
    for hit in hits {
        if !titles.contains(&hit.display_name) {
            titles.push(hit.display_name.clone());
        }
    }

    if titles.len() == 1 {
        if hits.len() > 1 {
            tracing::debug!(
                "{} entries titled '{}', using {}",
                hits.len(),
                first.display_name,
                first.source_path
            );
        }
        return Ok(first);
    }

    Err(LookupError::Ambiguous {
        query: query.to_string(),
        titles,
    })
}

/// Insertions, deletions and substitutions needed to turn `a` into `b`.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // row[j] = distance between the processed prefix of `a` and b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
