//! Terminal front-end: prompting and rendering.

pub mod prompt;
pub mod render;

pub use prompt::Prompter;
