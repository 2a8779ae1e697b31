pub mod args;
pub mod client;

pub use client::{ExiftoolClient, MetadataSource};
