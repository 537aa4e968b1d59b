pub mod etl;
pub mod frontmatter;
pub mod mapping;
pub mod pipeline;
pub mod pos;
pub mod report;
pub mod scanner;
pub mod validate;

pub use crate::domain::model::{MenuItem, PosCatalog, PosSystem, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
