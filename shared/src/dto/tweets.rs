use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// A single feed item.
///
/// `liked`/`retweeted` reflect the *current viewer's* relationship to the
/// tweet, not global state; the counts are server-authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    pub id: i64,
    pub body: String,
    pub user: UserInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: u32,
    pub liked: bool,
    pub retweets_count: u32,
    pub retweeted: bool,
}

/// Compose request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTweetRequest {
    pub body: String,
}

/// Edit request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTweetRequest {
    pub body: String,
}

/// Like-toggle response. Wire keys are camelCase (`likesCount`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: u32,
}

/// Retweet-toggle response. Wire keys are camelCase (`retweetsCount`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetweetToggle {
    pub retweeted: bool,
    pub retweets_count: u32,
}
