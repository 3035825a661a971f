//! Thin HTTP client for LinkedIn's user-generated-content endpoint.
//!
//! Posts a share payload to `/ugcPosts` per the UGC schema: author URN,
//! lifecycle state, share commentary, one image media entry, and public
//! visibility.
use crate::error::{AppError, AppResult};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct LinkedInClient {
    client: Client,
    base_url: String,
    access_token: String,
    user_id: String,
}

impl LinkedInClient {
    pub fn new(base_url: String, access_token: String, user_id: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        LinkedInClient { client: Client::new(), base_url: base, access_token, user_id }
    }

    /// Build the ugcPosts payload for a share with commentary and one image.
    fn build_share_payload(&self, content: &str, image_reference: &str) -> Value {
        json!({
            "author": format!("urn:li:person:{}", self.user_id),
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {"text": content},
                    "shareMediaCategory": "IMAGE",
                    "media": [
                        {
                            "status": "READY",
                            "originalUrl": image_reference,
                        }
                    ]
                }
            },
            "visibility": {"com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"}
        })
    }

    /// Post a share. Returns `Ok(true)` iff LinkedIn answered 201 Created.
    ///
    /// Any other status is reported as `Ok(false)`; the response body is
    /// discarded. Transport failures surface as errors.
    pub async fn post_share(&self, content: &str, image_reference: &str) -> AppResult<bool> {
        let url = format!("{}/ugcPosts", self.base_url);
        tracing::info!("Posting share to {}", url);

        // LinkedIn resolves originalUrl on its side; a local filesystem path
        // will not register as an asset. Kept for parity with the existing
        // workflow. TODO: move to the assets upload flow and pass the
        // returned urn:li:digitalmediaAsset here instead.
        if !image_reference.starts_with("http") {
            tracing::warn!("Image reference '{}' is not a resolvable URL", image_reference);
        }

        let payload = self.build_share_payload(content, image_reference);
        tracing::debug!("Share payload: {:?}", payload);

        let response = self.client.post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&payload)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        let status = response.status();
        if status == StatusCode::CREATED {
            tracing::info!("Share created");
            Ok(true)
        } else {
            tracing::error!("Share rejected. Status: {}", status);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> LinkedInClient {
        LinkedInClient::new(
            "http://localhost:9999".to_string(),
            "token".to_string(),
            "42".to_string(),
        )
    }

    #[test]
    fn payload_carries_author_urn_and_lifecycle() {
        let payload = test_client().build_share_payload("hello", "generated_image.png");
        assert_eq!(payload["author"], "urn:li:person:42");
        assert_eq!(payload["lifecycleState"], "PUBLISHED");
    }

    #[test]
    fn payload_share_content_shape() {
        let payload = test_client().build_share_payload("post text", "generated_image.png");
        let share = &payload["specificContent"]["com.linkedin.ugc.ShareContent"];
        assert_eq!(share["shareCommentary"]["text"], "post text");
        assert_eq!(share["shareMediaCategory"], "IMAGE");
        assert_eq!(share["media"][0]["status"], "READY");
        assert_eq!(share["media"][0]["originalUrl"], "generated_image.png");
        assert_eq!(
            payload["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
            "PUBLIC"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = LinkedInClient::new(
            "http://localhost:9999/".to_string(),
            "token".to_string(),
            "42".to_string(),
        );
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
