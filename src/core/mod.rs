pub mod currency;
pub mod dedup;
pub mod dinner;
pub mod gallery;
pub mod palette;
pub mod planet;
pub mod storefront;

pub use crate::domain::model::{MarsPhoto, MarsUiState, RoverName};
pub use crate::domain::ports::{Describable, GalleryConfigProvider, PhotoSource};
pub use crate::utils::error::Result;
