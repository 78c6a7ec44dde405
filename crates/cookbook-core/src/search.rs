//! Text buffer behind the search bar.

/// Action offered by the trailing control of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAffordance {
    /// Buffer is empty: the control triggers a search.
    Search,
    /// Buffer holds text: the control clears it.
    Clear,
}

/// Query typed into the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBuffer {
    query: String,
}

impl SearchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the buffer holds no characters at all. Whitespace is content.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Empty the buffer, returning what it held.
    pub fn clear(&mut self) -> String {
        std::mem::take(&mut self.query)
    }

    pub fn affordance(&self) -> SearchAffordance {
        if self.is_empty() {
            SearchAffordance::Search
        } else {
            SearchAffordance::Clear
        }
    }
}
