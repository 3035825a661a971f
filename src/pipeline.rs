//! Sequential orchestration of one generate-and-publish run.
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::linkedin::client::LinkedInClient;
use crate::notify::Notifier;
use crate::openai::client::OpenAiClient;

/// What a completed run produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The generated post text, trimmed.
    pub content: String,
    /// Where the image bytes were written.
    pub image_path: String,
    /// True iff LinkedIn accepted the share with 201 Created.
    pub published: bool,
}

/// Run the full pipeline once: generate text, generate and download the
/// image, write it to disk, publish the share, and notify on success.
///
/// Steps run strictly in order and the first failure aborts the run. A
/// partially written image file is left in place on error, and re-running
/// with the same inputs produces a second independent post.
pub async fn run(config: &Config) -> AppResult<PipelineOutcome> {
    let openai = OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
    );
    let linkedin = LinkedInClient::new(
        config.linkedin_base_url.clone(),
        config.linkedin_access_token.clone(),
        config.linkedin_user_id.clone(),
    );
    let notifier = Notifier::new(config.notification_email.clone());

    println!("Generating content...");
    let content = openai.generate_post_content().await?;

    println!("Generating image...");
    let image_url = openai.generate_image(&content).await?;
    let image = openai.download_image(&image_url).await?;

    tokio::fs::write(&config.image_output_path, &image)
        .await
        .map_err(AppError::Io)?;
    tracing::info!("Saved {} ({} bytes)", config.image_output_path, image.len());

    println!("Posting to LinkedIn...");
    let published = linkedin.post_share(&content, &config.image_output_path).await?;

    if published {
        println!("Posted successfully!");
        notifier.send_completion_notice();
    } else {
        println!("Failed to post.");
    }

    Ok(PipelineOutcome {
        content,
        image_path: config.image_output_path.clone(),
        published,
    })
}
