use crate::domain::model::{Catalog, ExportFormat, RecommendationBundle, UserPreferences};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// 匯出檔名，不含副檔名
    fn output_filename(&self) -> &str;
    fn export_format(&self) -> ExportFormat;
    fn seed(&self) -> Option<u64>;
    fn monitoring_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// 取得 (快取的) 目的地目錄
    async fn extract(&self) -> Result<Arc<Catalog>>;
    async fn transform(
        &self,
        catalog: Arc<Catalog>,
        preferences: &UserPreferences,
    ) -> Result<RecommendationBundle>;
    async fn load(&self, bundle: &RecommendationBundle) -> Result<String>;
}
