use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Caller input shared by every source operation.
///
/// `titles` drives `single` and `movie`, `query` drives `batch`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchOptions {
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            query: None,
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            titles: Vec::new(),
            query: Some(query.into()),
        }
    }

    pub fn first_title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }
}

/// Wire-level response wrapper; only `data` carries the payload.
#[derive(Debug, Deserialize)]
pub struct QueryEnvelope {
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<Media>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Media {
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: MediaTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(rename = "streamingEpisodes", default)]
    pub streaming_episodes: Option<Vec<StreamingEpisode>>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StreamingEpisode {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Media as seen by `batch`, where only the episode list is read.
#[derive(Debug, Deserialize, Clone)]
pub struct EpisodeListData {
    #[serde(rename = "Media")]
    pub media: Option<EpisodeList>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EpisodeList {
    #[serde(rename = "streamingEpisodes", default)]
    pub streaming_episodes: Option<Vec<StreamingEpisode>>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Low,
    Medium,
    High,
}

// AniList sends `null` for objects it has no data for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Media {
    pub fn preferred_title(&self) -> &str {
        self.title
            .english
            .as_deref()
            .or(self.title.romaji.as_deref())
            .unwrap_or("Unknown Title")
    }

    pub fn streaming_links(&self) -> &[StreamingEpisode] {
        self.streaming_episodes.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Accuracy::Low => "Low",
            Accuracy::Medium => "Medium",
            Accuracy::High => "High",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preferred_title_prefers_english() {
        let media: Media = serde_json::from_value(json!({
            "id": 1,
            "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan" }
        }))
        .unwrap();
        assert_eq!(media.preferred_title(), "Attack on Titan");

        let media: Media = serde_json::from_value(json!({
            "id": 2,
            "title": { "romaji": "Mushishi", "english": null }
        }))
        .unwrap();
        assert_eq!(media.preferred_title(), "Mushishi");
    }

    #[test]
    fn missing_streaming_episodes_reads_as_empty() {
        let media: Media = serde_json::from_value(json!({
            "id": 3,
            "title": {},
            "duration": 106,
            "streamingEpisodes": null
        }))
        .unwrap();
        assert!(media.streaming_episodes.is_none());
        assert!(media.streaming_links().is_empty());
        assert_eq!(media.duration, Some(106));
        assert_eq!(media.preferred_title(), "Unknown Title");
    }

    #[test]
    fn null_or_missing_title_reads_as_empty() {
        let media: Media =
            serde_json::from_value(json!({ "id": 4, "title": null, "episodes": 1 })).unwrap();
        assert_eq!(media.title, MediaTitle::default());
        assert_eq!(media.preferred_title(), "Unknown Title");

        let media: Media = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(media.title, MediaTitle::default());
    }

    #[test]
    fn search_options_accepts_partial_json() {
        let opts: SearchOptions = serde_json::from_value(json!({ "query": "Frieren" })).unwrap();
        assert!(opts.titles.is_empty());
        assert_eq!(opts.query.as_deref(), Some("Frieren"));

        let opts = SearchOptions::with_titles(["A", "B"]);
        assert_eq!(opts.first_title(), Some("A"));
    }
}
