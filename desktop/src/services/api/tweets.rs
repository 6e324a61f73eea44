//! # Feed and Tweet Mutation Endpoints
//!
//! The feed fetch plus the five write operations. Like/retweet return the
//! server's authoritative counts so the cache can be patched without a
//! refetch; create/update return the fresh tweet but callers refetch the
//! feed anyway because ordering is server-determined.

use shared::dto::tweets::{
    CreateTweetRequest, LikeToggle, RetweetToggle, Tweet, UpdateTweetRequest,
};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the feed list in server order.
pub async fn feed(client: &ApiClient) -> Result<Vec<Tweet>> {
    client
        .dispatch(client.http.get(client.url("/tweets")))
        .await
}

/// Create a tweet; the server assigns id and timestamps.
#[tracing::instrument(skip(client, body))]
pub async fn create_tweet(client: &ApiClient, body: String) -> Result<Tweet> {
    let request = CreateTweetRequest { body };
    client
        .dispatch(client.http.post(client.url("/tweets")).json(&request))
        .await
}

/// Replace a tweet's body (author only, server-enforced).
#[tracing::instrument(skip(client, body))]
pub async fn update_tweet(client: &ApiClient, id: i64, body: String) -> Result<Tweet> {
    let request = UpdateTweetRequest { body };
    client
        .dispatch(
            client
                .http
                .patch(client.url(&format!("/tweets/{}", id)))
                .json(&request),
        )
        .await
}

/// Delete a tweet (author only, server-enforced).
#[tracing::instrument(skip(client))]
pub async fn delete_tweet(client: &ApiClient, id: i64) -> Result<()> {
    client
        .dispatch_unit(client.http.delete(client.url(&format!("/tweets/{}", id))))
        .await
}

/// Toggle the viewer's like on a tweet.
#[tracing::instrument(skip(client))]
pub async fn toggle_like(client: &ApiClient, id: i64) -> Result<LikeToggle> {
    client
        .dispatch(client.http.post(client.url(&format!("/tweets/{}/like", id))))
        .await
}

/// Toggle the viewer's retweet on a tweet.
#[tracing::instrument(skip(client))]
pub async fn toggle_retweet(client: &ApiClient, id: i64) -> Result<RetweetToggle> {
    client
        .dispatch(client.http.post(client.url(&format!("/tweets/{}/retweet", id))))
        .await
}
