//! Provider-boundary error types.

use thiserror::Error;

/// Errors surfaced to the host registry.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested icon has no entry in the archive. Carries up to 5
    /// suggested names when any existing name loosely matches the request.
    #[error("Icon '{name}' not found in Lucide pack.{}", suggestion_clause(.suggestions))]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Archive or IO failure. The archive is a build-time dependency, so
    /// these are deployment errors and pass through unmodified.
    #[error(transparent)]
    Archive(#[from] anyhow::Error),
}

impl ResourceError {
    pub fn not_found(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            suggestions,
        }
    }
}

fn suggestion_clause(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Similar names: {}", suggestions.join(", "))
    }
}
