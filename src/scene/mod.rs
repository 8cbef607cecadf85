pub mod build;
pub mod style;
pub mod text;
