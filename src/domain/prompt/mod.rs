//! Prompt assembly: pure constructors for every completion purpose.

mod assembler;
mod image;

pub use assembler::{
    finalize_request, image_explanation_request, modify_request, question_request,
    recommendation_request, ASPECT_ROTATION,
};
pub use image::EncodedImage;
