use strsim::jaro_winkler;

use crate::models::{Category, RecipeEntry, RecipePool};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions offered on a miss.
pub const MAX_SUGGESTIONS: usize = 5;

/// Reply for a blank query.
pub const EMPTY_QUERY_PROMPT: &str = "Please enter a dish name to search for.";

/// A pool entry matched by a lookup, tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub category: Category,
    pub entry: RecipeEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyQuery { prompt: String },
    Hits(Vec<SearchHit>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactOutcome {
    EmptyQuery { prompt: String },
    Found(SearchHit),
    NotFound {
        message: String,
        suggestions: Vec<String>,
    },
}

fn empty_prompt() -> String {
    EMPTY_QUERY_PROMPT.to_string()
}

/// Substring search over canonical and composite names in every category.
///
/// Hits come back in pool order.
pub fn search(pool: &RecipePool, query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::EmptyQuery {
            prompt: empty_prompt(),
        };
    }

    let hits = pool
        .iter()
        .flat_map(|(category, entries)| {
            entries.iter().map(move |entry| (category, entry))
        })
        .filter(|(_, entry)| {
            entry.canonical_name().to_lowercase().contains(&needle)
                || entry.name.to_lowercase().contains(&needle)
        })
        .map(|(category, entry)| SearchHit {
            category,
            entry: entry.clone(),
        })
        .collect();

    SearchOutcome::Hits(hits)
}

/// Exact, case-insensitive match on the canonical dish name.
///
/// Returns the first match in pool order. A miss carries close names.
pub fn search_exact(pool: &RecipePool, query: &str) -> ExactOutcome {
    let wanted = query.trim().to_lowercase();
    if wanted.is_empty() {
        return ExactOutcome::EmptyQuery {
            prompt: empty_prompt(),
        };
    }

    let found = pool.iter().find_map(|(category, entries)| {
        entries
            .iter()
            .find(|entry| entry.canonical_name().to_lowercase() == wanted)
            .map(|entry| SearchHit {
                category,
                entry: entry.clone(),
            })
    });

    match found {
        Some(hit) => ExactOutcome::Found(hit),
        None => {
            let suggestions = suggest(pool, &wanted);
            let message = if suggestions.is_empty() {
                format!("No dish named '{}'. Try a broader search.", query.trim())
            } else {
                format!(
                    "No dish named '{}'. Did you mean: {}?",
                    query.trim(),
                    suggestions.join(", ")
                )
            };
            ExactOutcome::NotFound {
                message,
                suggestions,
            }
        }
    }
}

/// Canonical names closest to `wanted`, best first, without repeats.
fn suggest(pool: &RecipePool, wanted: &str) -> Vec<String> {
    let mut candidates: Vec<(&str, f64)> = pool
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|entry| {
            let name = entry.canonical_name();
            (name, jaro_winkler(&name.to_lowercase(), wanted))
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut suggestions: Vec<String> = Vec::new();
    for (name, _) in candidates {
        if !suggestions.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            suggestions.push(name.to_string());
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}
