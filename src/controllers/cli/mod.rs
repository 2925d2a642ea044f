pub mod args;
pub mod batch;
