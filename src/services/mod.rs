pub mod input_normalizer;
pub mod pipeline;
pub mod result_encoder;

pub use input_normalizer::InputNormalizer;
pub use pipeline::ImagePipeline;
pub use result_encoder::{EncodedResult, DATA_URI_PREFIX};
