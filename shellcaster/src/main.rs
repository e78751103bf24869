//! shellcaster - Broadcast a message to multiple social platforms

mod report;

use std::path::Path;

use clap::Parser;
use libshellcaster::dispatcher::{parse_platform_list, Dispatcher};
use libshellcaster::env::XCredentials;
use libshellcaster::error::{PlatformError, Result, ShellcasterError};
use libshellcaster::logging::{self, LogFormat, LoggingConfig};
use libshellcaster::platforms::x::XPlatform;

use report::Color;

#[derive(Parser, Debug)]
#[command(name = "shellcaster")]
#[command(version)]
#[command(about = "Broadcast a message to multiple social platforms")]
#[command(long_about = "\
shellcaster - Broadcast a message to multiple social platforms

DESCRIPTION:
    shellcaster publishes a text or Markdown message to Facebook, LinkedIn,
    X and Blogger through each platform's REST API. Credentials are read
    from environment variables (a .env file in the current or a parent
    directory is picked up automatically).

USAGE EXAMPLES:
    # Post a short message everywhere
    shellcaster --post \"Release 1.2 is out!\"

    # Post a Markdown file to selected platforms
    shellcaster --file notes.md --platform facebook,linkedin

    # Show worldwide trending topics
    shellcaster --trends

ENVIRONMENT:
    FACEBOOK_PAGE_ID, FACEBOOK_ACCESS_TOKEN
    LINKEDIN_ACCESS_TOKEN, LINKEDIN_AUTHOR_URN
    X_CONSUMER_KEY, X_CONSUMER_SECRET, X_ACCESS_TOKEN, X_ACCESS_TOKEN_SECRET
    BLOGGER_ACCESS_TOKEN, BLOGGER_BLOG_ID

EXIT CODES:
    0 - Every requested platform succeeded
    1 - At least one platform failed
    2 - Usage error (bad arguments)
    3 - Invalid input (non-Markdown file, empty content)
")]
struct Cli {
    /// Text to post
    #[arg(long, value_name = "TEXT", group = "input")]
    post: Option<String>,

    /// Markdown file to post
    #[arg(long, value_name = "PATH", group = "input")]
    file: Option<std::path::PathBuf>,

    /// Show trending topics for a location (WOEID, default: 1 = worldwide)
    #[arg(
        long,
        value_name = "WOEID",
        num_args = 0..=1,
        default_missing_value = "1",
        group = "input"
    )]
    trends: Option<String>,

    /// Comma-separated list of platforms (default: all)
    #[arg(short, long, value_name = "LIST")]
    platform: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(raw_woeid) = cli.trends.as_deref() {
        return show_trends(raw_woeid).await;
    }

    let content = load_content(&cli)?;
    let requested = cli.platform.as_deref().map(parse_platform_list);

    let dispatcher = Dispatcher::from_env();
    let results = dispatcher.dispatch(&content, requested.as_deref()).await;
    tracing::debug!("dispatched to {} platform(s)", results.len());

    report::render_results(&results);

    let failed = results.iter().filter(|r| !r.success).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(PlatformError::Posting(format!(
            "{} of {} platform(s) failed",
            failed,
            results.len()
        ))
        .into())
    }
}

/// Resolve post content from `--post` or `--file`.
///
/// The clap group makes the input flags mutually exclusive; supplying none
/// of them is caught here so it exits through the invalid-input path.
/// Files must carry a Markdown extension and are rejected before any
/// network activity; empty content is rejected the same way.
fn load_content(cli: &Cli) -> Result<String> {
    let content = if let Some(text) = &cli.post {
        text.clone()
    } else if let Some(path) = &cli.file {
        if !is_markdown(path) {
            return Err(ShellcasterError::InvalidInput(
                "Only Markdown files (.md, .markdown) are supported".to_string(),
            ));
        }
        std::fs::read_to_string(path).map_err(|e| {
            ShellcasterError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })?
    } else {
        return Err(ShellcasterError::InvalidInput(
            "No post content provided. Use --post, --file or --trends.".to_string(),
        ));
    };

    if content.trim().is_empty() {
        return Err(ShellcasterError::InvalidInput(
            "Post content is empty".to_string(),
        ));
    }

    Ok(content)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "md" || ext == "markdown"
        })
        .unwrap_or(false)
}

async fn show_trends(raw_woeid: &str) -> Result<()> {
    let woeid: u32 = match raw_woeid.parse() {
        Ok(id) => id,
        Err(_) => {
            report::print_colored(
                &format!("Invalid WOEID: {}. Using default (Worldwide).", raw_woeid),
                Color::Yellow,
            );
            1
        }
    };

    let platform = XPlatform::new(XCredentials::from_env()?)?;
    let trends = platform.fetch_trends(woeid).await?;

    if trends.is_empty() {
        report::print_colored("No trends found.", Color::Red);
        return Ok(());
    }

    report::print_colored(
        &format!("Top {} trending topics (WOEID: {}):", trends.len(), woeid),
        Color::Green,
    );
    for (i, trend) in trends.iter().enumerate() {
        let volume = trend
            .tweet_volume
            .map(|v| format!(" ({} tweets)", v))
            .unwrap_or_default();
        println!("{}. {}{}", i + 1, trend.name, volume);
        if !trend.url.is_empty() {
            println!("   {}", trend.url);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_post(text: &str) -> Cli {
        Cli {
            post: Some(text.to_string()),
            file: None,
            trends: None,
            platform: None,
            verbose: false,
        }
    }

    #[test]
    fn test_load_content_from_post_flag() {
        let content = load_content(&cli_with_post("hello")).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_load_content_rejects_empty_post() {
        let result = load_content(&cli_with_post("   "));
        assert!(matches!(result, Err(ShellcasterError::InvalidInput(_))));
    }

    #[test]
    fn test_load_content_rejects_non_markdown_file() {
        let cli = Cli {
            post: None,
            file: Some(std::path::PathBuf::from("post.txt")),
            trends: None,
            platform: None,
            verbose: false,
        };
        let result = load_content(&cli);
        match result {
            Err(ShellcasterError::InvalidInput(msg)) => {
                assert!(msg.contains("Markdown"));
            }
            other => panic!("Expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_load_content_reads_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        std::fs::write(&path, "# Hi\n\nBody").unwrap();

        let cli = Cli {
            post: None,
            file: Some(path),
            trends: None,
            platform: None,
            verbose: false,
        };
        assert_eq!(load_content(&cli).unwrap(), "# Hi\n\nBody");
    }

    #[test]
    fn test_load_content_missing_file_is_invalid_input() {
        let cli = Cli {
            post: None,
            file: Some(std::path::PathBuf::from("/nonexistent/note.md")),
            trends: None,
            platform: None,
            verbose: false,
        };
        let result = load_content(&cli);
        match result {
            Err(e @ ShellcasterError::InvalidInput(_)) => assert_eq!(e.exit_code(), 3),
            other => panic!("Expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_is_markdown_extensions() {
        assert!(is_markdown(Path::new("a.md")));
        assert!(is_markdown(Path::new("a.MD")));
        assert!(is_markdown(Path::new("a.markdown")));
        assert!(!is_markdown(Path::new("a.txt")));
        assert!(!is_markdown(Path::new("md")));
    }
}
