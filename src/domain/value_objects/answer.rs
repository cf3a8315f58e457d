//! Free-text answers to yes/no prompts

/// A user's answer, interpreted by fixed recognizers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// `yes` or `y`, exactly
    pub fn is_yes(&self) -> bool {
        matches!(self.0.as_str(), "yes" | "y")
    }

    /// `no` or `n`, exactly
    pub fn is_no(&self) -> bool {
        matches!(self.0.as_str(), "no" | "n")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
