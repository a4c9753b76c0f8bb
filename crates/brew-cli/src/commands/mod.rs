pub mod batch;
pub mod calc;
pub mod store;
pub mod template;
