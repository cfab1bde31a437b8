pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::MarsPhotosRepository;
pub use config::{toml_config::GalleryToml, GalleryOptions};
pub use crate::core::gallery::MarsGallery;
pub use domain::model::{FailurePolicy, MarsPhoto, MarsUiState, RoverName};
pub use utils::error::{CourseError, Result};
