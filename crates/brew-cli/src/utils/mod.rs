pub mod progress;
pub mod sheets;
