// Domain layer: value records and ports. No I/O lives here.

pub mod grocery;
pub mod library;
pub mod model;
pub mod ports;
