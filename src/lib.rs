pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::script::{Script, Step};
pub use crate::core::renderer::RecordRenderer;
pub use domain::model::{Employee, Person};
pub use domain::ports::Render;
pub use utils::error::{RenderError, Result};
