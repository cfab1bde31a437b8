use crate::domain::model::{FailurePolicy, MarsPhoto, RoverName};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can describe how it is read.
pub trait Describable {
    fn read(&self) -> String;
}

pub trait GalleryConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn failure_policy(&self) -> FailurePolicy;
}

#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn fetch_photos(&self, rover: RoverName, sol: u32) -> Result<Vec<MarsPhoto>>;
}
