use ani_source::config::ConfigManager;
use ani_source::{AniListSource, Media, MetadataSource, SearchOptions, StreamingEpisode};
use clap::{Parser, Subcommand};
use log::info;
use std::fmt::Write;

#[derive(Parser)]
#[command(name = "ani-source")]
#[command(about = "AniList metadata & streaming link lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Override the GraphQL endpoint from config.toml
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    Single {
        #[arg(short, long = "title", required = true)]
        titles: Vec<String>,
    },
    Batch {
        #[arg(short, long)]
        query: String,
    },
    Movie {
        #[arg(short, long = "title", required = true)]
        titles: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_manager = ConfigManager::new()?;
    info!("Configuration loaded from {:?}", config_manager.config_path);

    let config = &config_manager.config;
    anyhow::ensure!(
        config.general.source == "anilist",
        "Unknown source '{}' in {:?}",
        config.general.source,
        config_manager.config_path
    );
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.anilist.endpoint.clone());
    let source = AniListSource::with_endpoint(endpoint, config.request.timeout())?;
    info!(
        "Using {} source ({}, accuracy: {})",
        source.name(),
        source.description(),
        source.accuracy()
    );

    let json = cli.json;
    let output = match cli.command {
        Commands::Single { titles } => {
            announce(json, format!("🔍 Searching {} for '{}'...", source.name(), titles[0]));
            let media = source.single(&SearchOptions::with_titles(titles)).await?;
            render_media(media.as_ref(), json)?
        }
        Commands::Batch { query } => {
            announce(json, format!("📺 Fetching streaming episodes for '{}'...", query));
            let episodes = source.batch(&SearchOptions::with_query(query)).await?;
            render_episodes(&episodes, json)?
        }
        Commands::Movie { titles } => {
            announce(json, format!("🎬 Searching {} for movie '{}'...", source.name(), titles[0]));
            let media = source.movie(&SearchOptions::with_titles(titles)).await?;
            render_media(media.as_ref(), json)?
        }
    };

    print!("{}", output);
    Ok(())
}

// In `--json` mode stdout carries only the result.
fn announce(json: bool, message: String) {
    if !json {
        println!("{}", message);
    }
}

fn render_media(media: Option<&Media>, as_json: bool) -> anyhow::Result<String> {
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&media)?));
    }

    let Some(media) = media else {
        return Ok("No results found.\n".to_string());
    };

    let mut out = String::new();
    writeln!(out, "\n{} (ID: {})", media.preferred_title(), media.id)?;
    if let Some(romaji) = media.title.romaji.as_deref()
        && Some(romaji) != media.title.english.as_deref()
    {
        writeln!(out, "   Romaji: {}", romaji)?;
    }
    if let Some(episodes) = media.episodes {
        writeln!(out, "   Episodes: {}", episodes)?;
    }
    if let Some(duration) = media.duration {
        writeln!(out, "   Duration: {} min", duration)?;
    }
    out.push_str(&render_episodes(media.streaming_links(), false)?);
    Ok(out)
}

fn render_episodes(episodes: &[StreamingEpisode], as_json: bool) -> anyhow::Result<String> {
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(episodes)?));
    }

    if episodes.is_empty() {
        return Ok("   No streaming episodes listed.\n".to_string());
    }

    let mut out = String::new();
    for (i, ep) in episodes.iter().enumerate() {
        writeln!(
            out,
            "   {}. {} - {}",
            i + 1,
            ep.title.as_deref().unwrap_or("Untitled"),
            ep.url.as_deref().unwrap_or("?")
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn spirited_away() -> Media {
        serde_json::from_value(json!({
            "id": 199,
            "title": { "romaji": "Sen to Chihiro no Kamikakushi", "english": "Spirited Away" },
            "duration": 125,
            "streamingEpisodes": [{ "title": "Movie", "url": "https://example.com/199" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_json_output_is_parseable() {
        let media = spirited_away();
        let out = render_media(Some(&media), true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], 199);
        assert_eq!(parsed["duration"], 125);

        let out = render_episodes(media.streaming_links(), true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["url"], "https://example.com/199");
    }

    #[test]
    fn test_json_output_for_no_match_is_null() {
        let out = render_media(None, true).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), Value::Null);

        let out = render_episodes(&[], true).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), json!([]));
    }

    #[test]
    fn test_text_output() {
        let out = render_media(Some(&spirited_away()), false).unwrap();
        assert!(out.contains("Spirited Away (ID: 199)"));
        assert!(out.contains("Romaji: Sen to Chihiro no Kamikakushi"));
        assert!(out.contains("Duration: 125 min"));
        assert!(out.contains("1. Movie - https://example.com/199"));

        assert_eq!(render_media(None, false).unwrap(), "No results found.\n");
    }
}
