pub mod client;

pub use client::{
    WordClient,
    DEFAULT_BASE_URL,
};
