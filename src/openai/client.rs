//! Thin HTTP client for the OpenAI generation endpoints.
//!
//! - `generate_post_content` posts the fixed instruction to `/chat/completions`.
//! - `generate_image` posts a prompt to `/images/generations` and returns the
//!   transient image URL.
//! - `download_image` fetches raw bytes from that URL.
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Model used for post generation.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Fixed system instruction; content generation takes no other input.
pub const SYSTEM_PROMPT: &str =
    "Generate a LinkedIn post about frontend development or graphic design.";

const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        OpenAiClient { client: Client::new(), base_url: base, api_key }
    }

    /// Request a generated post from the chat completions endpoint.
    ///
    /// Uses the fixed model and system instruction. Returns the first
    /// choice's content, trimmed.
    pub async fn generate_post_content(&self) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!("Requesting post content from {}", url);

        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            }],
        };

        let response = self.client.post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Chat completion failed. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            return Err(AppError::Provider(error_message));
        }

        let body: ChatResponse = response.json().await.map_err(AppError::HttpClient)?;
        let content = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| AppError::Provider("Chat completion returned no choices".to_string()))?;
        Ok(content.trim().to_string())
    }

    /// Request exactly one square image for `prompt`.
    ///
    /// The prompt is sent verbatim; over-long prompts surface as provider
    /// rejections. Returns the transient URL the provider issued.
    pub async fn generate_image(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/images/generations", self.base_url);
        tracing::info!("Requesting image generation from {}", url);
        tracing::debug!("Image prompt: {:?}", prompt);

        let request = ImageRequest {
            prompt: prompt.to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
        };

        let response = self.client.post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Image generation failed. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            return Err(AppError::Provider(error_message));
        }

        let body: ImageResponse = response.json().await.map_err(AppError::HttpClient)?;
        body.data
            .into_iter()
            .next()
            .map(|datum| datum.url)
            .ok_or_else(|| AppError::Provider("Image generation returned no data".to_string()))
    }

    /// Fetch raw image bytes from the provider-issued URL.
    pub async fn download_image(&self, url: &str) -> AppResult<Vec<u8>> {
        tracing::info!("Downloading image from {}", url);
        let response = self.client.get(url)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.bytes().await.map(|b| b.to_vec()).map_err(AppError::HttpClient)
        } else {
            Err(AppError::Provider(format!("Failed to download image: {:?}", response.status())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_shape() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], SYSTEM_PROMPT);
    }

    #[test]
    fn image_request_asks_for_one_square_image() {
        let request = ImageRequest {
            prompt: "a post".to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"prompt": "a post", "n": 1, "size": "1024x1024"}));
    }

    #[test]
    fn chat_response_first_choice_parses() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  hello  "}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        });
        let parsed: ChatResponse = serde_json::from_value(body).unwrap();
        let content = parsed.choices.first().and_then(|c| c.message.content.as_deref()).unwrap();
        assert_eq!(content.trim(), "hello");
    }

    #[test]
    fn image_response_url_parses() {
        let body = json!({"created": 1, "data": [{"url": "https://img.example/x.png"}]});
        let parsed: ImageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.data[0].url, "https://img.example/x.png");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OpenAiClient::new("http://localhost:9999/".to_string(), "k".to_string());
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
