pub mod anilist;

use crate::error::Result;
use crate::models::{Accuracy, Media, SearchOptions, StreamingEpisode};
use std::future::Future;

/// Contract shared by every metadata source an orchestrator can pick from.
pub trait MetadataSource {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn accuracy(&self) -> Accuracy;

    /// Looks up a series by its first title. `None` when nothing matches.
    fn single(
        &self,
        options: &SearchOptions,
    ) -> impl Future<Output = Result<Option<Media>>> + Send;

    /// Streaming episodes for `options.query`, empty when there are none.
    fn batch(
        &self,
        options: &SearchOptions,
    ) -> impl Future<Output = Result<Vec<StreamingEpisode>>> + Send;

    /// Looks up a movie by its first title. `None` when nothing matches.
    fn movie(&self, options: &SearchOptions)
    -> impl Future<Output = Result<Option<Media>>> + Send;
}
