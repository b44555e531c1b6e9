use crate::errors::DomainError;

pub const DEFAULT_LIMIT: usize = 3;

/// Per-request input to alternatives resolution. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub title: String,
    pub category: String,
    pub limit: usize,
}

impl ProductQuery {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self { title: title.into(), category: category.into(), limit: DEFAULT_LIMIT }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Query text sent to the vector service.
    pub fn search_text(&self) -> String {
        format!("sustainable eco-friendly {} {}", self.category, self.title)
    }

    pub fn validate(&self, max_limit: usize) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidQuery("productTitle must not be empty".to_string()));
        }
        if self.limit > max_limit {
            return Err(DomainError::InvalidQuery(format!(
                "limit must be at most {max_limit} (got {})",
                self.limit
            )));
        }
        Ok(())
    }
}
