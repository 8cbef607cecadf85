pub mod looper;
pub mod overlay;
