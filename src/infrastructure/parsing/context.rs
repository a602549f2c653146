//! Parsing context for listing extraction
//!
//! Carries the page being parsed and, for fragment parsing, the position of
//! the candidate so that log lines and errors can point at it.

/// Context information for parsing operations
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Page the fragments came from
    pub page_url: String,

    /// Zero-based position of the candidate being parsed
    pub candidate_index: usize,
}

impl ParseContext {
    /// Create new parse context
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            candidate_index: 0,
        }
    }

    /// Context for one candidate fragment of this page
    pub fn for_candidate(&self, index: usize) -> Self {
        Self {
            candidate_index: index,
            ..self.clone()
        }
    }
}
