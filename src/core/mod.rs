pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;
pub mod utils;

pub use errors::WordbookError;
pub use models::{
    WordFields,
    WordPatch,
    WordRecord,
    WordsEnvelope,
};
