pub mod normalize;
pub mod rules;
pub mod scoring;
pub mod variants;
