pub mod app;
pub mod clock;
pub mod effects;
pub mod logging;
pub mod render;
pub mod sink;
pub mod ticker;
