pub mod client;

pub use client::{Backend, HttpBackend};
