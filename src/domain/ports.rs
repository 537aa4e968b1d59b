use crate::domain::model::{MenuItem, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_dir(&self) -> &str;
    fn data_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<MenuItem>>;
    async fn transform(&self, items: Vec<MenuItem>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
