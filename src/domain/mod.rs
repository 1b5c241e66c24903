// Domain layer: models, the backend port, and bundled sample content.

pub mod model;
pub mod ports;
pub mod sample;
