pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::MenuPipeline};
pub use domain::model::{MenuItem, PosCatalog, PosSystem};
pub use utils::error::{EtlError, Result};
