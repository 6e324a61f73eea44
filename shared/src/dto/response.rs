use serde::{Deserialize, Serialize};

/// Optional response envelope.
///
/// The server may wrap any payload as `{success, issue?, message?, data?}`.
/// When `success` is false the response is a business-rule rejection
/// regardless of HTTP status; `issue` carries the specific reason and
/// `message` a generic one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The most specific human-readable text the envelope carries.
    pub fn reason(&self) -> Option<&str> {
        self.issue.as_deref().or(self.message.as_deref())
    }
}
