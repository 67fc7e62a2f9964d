//! Image-generation adapters.

mod http_generator;
mod mock_generator;

pub use http_generator::{HttpImageGenerator, ImageGeneratorConfig};
pub use mock_generator::MockImageGenerator;
