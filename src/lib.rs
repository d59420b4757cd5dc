pub mod capture;
pub mod config;
pub mod consts;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod matcher;
pub mod normalizer;
pub mod recognizer;
pub mod stroke;
pub mod templates;

pub use geometry::Point;
pub use recognizer::Recognizer;
pub use stroke::StrokeBuffer;
pub use templates::TemplateSet;
