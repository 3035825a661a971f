use clap::Parser;
use linkedin_autopost::{pipeline, Config};

#[derive(Parser, Debug)]
#[command(name = "autopost", about = "Generate a post and image and publish them to LinkedIn", version)]
struct Cli {
    /// Override the OpenAI API base URL
    #[arg(long, value_name = "URL")]
    openai_url: Option<String>,

    /// Override the LinkedIn API base URL
    #[arg(long, value_name = "URL")]
    linkedin_url: Option<String>,

    /// Output path for the generated image
    #[arg(long, value_name = "PATH")]
    out: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            // Fail before any network call, but keep the flat exit behavior.
            eprintln!("Error: {}", e);
            return;
        }
    };
    if let Some(url) = cli.openai_url {
        config.openai_base_url = url;
    }
    if let Some(url) = cli.linkedin_url {
        config.linkedin_base_url = url;
    }
    if let Some(path) = cli.out {
        config.image_output_path = path;
    }
    Config::print_env_vars();

    if let Err(e) = pipeline::run(&config).await {
        eprintln!("Error: {}", e);
    }
}
