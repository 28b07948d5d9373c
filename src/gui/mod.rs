pub mod actions;
pub mod app;
pub mod error_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;
pub mod word_form;
pub mod word_list;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::WordbookApp;
