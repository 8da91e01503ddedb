mod config;
pub(crate) mod section;
mod syntax;
pub(crate) mod value;

pub use config::Config;
pub use syntax::{Comment, Separator, Syntax};
