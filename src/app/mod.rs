// Application layer: adapters that talk to the outside world.

pub mod mars_photos;

pub use mars_photos::{placeholder_photos, MarsPhotosRepository};
