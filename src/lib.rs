//! AniList-backed anime metadata source.
//!
//! [`source::anilist::AniListSource`] implements [`source::MetadataSource`]:
//! `single` and `movie` look a title up, `batch` returns its streaming
//! episodes. Every call is one GraphQL round trip through [`api::QueryExecutor`].

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use error::{Result, SourceError};
pub use models::{Accuracy, Media, MediaTitle, SearchOptions, StreamingEpisode};
pub use source::MetadataSource;
pub use source::anilist::AniListSource;
