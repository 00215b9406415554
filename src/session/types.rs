//! Session types

/// A page fetch issued by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Session generation the request belongs to
    pub generation: u64,
    /// 1-based page number
    pub page: u32,
    /// Request key
    pub url: String,
}

/// What a session did with a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Page appended to the session
    Committed,
    /// Fetch failed; the session is now in the error state
    Failed,
    /// Result belonged to another generation or an unwanted page and was dropped
    Discarded,
}
