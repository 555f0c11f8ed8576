use crate::api::{ANILIST_URL, QueryExecutor};
use crate::error::{Result, SourceError};
use crate::models::{
    Accuracy, EpisodeListData, Media, MediaData, SearchOptions, StreamingEpisode,
};
use crate::source::MetadataSource;
use log::debug;
use serde_json::json;
use std::time::Duration;

const SERIES_QUERY: &str = r#"
query ($search: String) {
  Media(search: $search, type: ANIME) {
    id
    title { romaji, english }
    episodes
    streamingEpisodes { title, url }
  }
}
"#;

const MOVIE_QUERY: &str = r#"
query ($search: String) {
  Media(search: $search, type: ANIME) {
    id
    title { romaji, english }
    duration
    streamingEpisodes { title, url }
  }
}
"#;

pub struct AniListSource {
    executor: QueryExecutor,
}

impl AniListSource {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(ANILIST_URL, None)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            executor: QueryExecutor::new(endpoint, timeout)?,
        })
    }

    fn first_title<'a>(options: &'a SearchOptions, operation: &str) -> Result<&'a str> {
        options.first_title().ok_or_else(|| {
            SourceError::InvalidInput(format!("{operation} requires at least one title"))
        })
    }
}

impl MetadataSource for AniListSource {
    fn name(&self) -> &'static str {
        "AniList"
    }

    fn description(&self) -> &'static str {
        "Fetches anime details and streaming links from AniList"
    }

    fn accuracy(&self) -> Accuracy {
        Accuracy::High
    }

    async fn single(&self, options: &SearchOptions) -> Result<Option<Media>> {
        let search = Self::first_title(options, "single")?;
        debug!("AniList single lookup for '{}'", search);

        let data: MediaData = self
            .executor
            .execute_as(SERIES_QUERY, json!({ "search": search }))
            .await?;
        Ok(data.media)
    }

    async fn batch(&self, options: &SearchOptions) -> Result<Vec<StreamingEpisode>> {
        debug!("AniList batch lookup for {:?}", options.query);

        let data: EpisodeListData = self
            .executor
            .execute_as(SERIES_QUERY, json!({ "search": options.query }))
            .await?;
        Ok(data
            .media
            .and_then(|m| m.streaming_episodes)
            .unwrap_or_default())
    }

    async fn movie(&self, options: &SearchOptions) -> Result<Option<Media>> {
        let search = Self::first_title(options, "movie")?;
        debug!("AniList movie lookup for '{}'", search);

        let data: MediaData = self
            .executor
            .execute_as(MOVIE_QUERY, json!({ "search": search }))
            .await?;
        Ok(data.media)
    }
}
