use crate::core::catalog::CatalogCache;
use crate::core::export;
use crate::core::recommender::recommend;
use crate::core::{
    Catalog, ConfigProvider, Pipeline, RecommendationBundle, Result, Storage, UserPreferences,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

/// 目錄 → 推薦 → 輸出檔案。目錄在第一次請求時載入並快取
pub struct RecommendationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: CatalogCache,
}

impl<S: Storage, C: ConfigProvider> RecommendationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            catalog: CatalogCache::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn catalog_loaded(&self) -> bool {
        self.catalog.is_loaded()
    }

    fn rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using seeded activity selection (seed {})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }

    pub fn output_file(&self) -> String {
        let filename = format!(
            "{}.{}",
            self.config.output_filename(),
            self.config.export_format().extension()
        );
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecommendationPipeline<S, C> {
    async fn extract(&self) -> Result<Arc<Catalog>> {
        let catalog = self
            .catalog
            .load_from(&self.storage, self.config.catalog_path())
            .await?;
        tracing::debug!("Catalog ready with {} destinations", catalog.len());
        Ok(catalog)
    }

    async fn transform(
        &self,
        catalog: Arc<Catalog>,
        preferences: &UserPreferences,
    ) -> Result<RecommendationBundle> {
        let mut rng = self.rng();
        recommend(&catalog, preferences, &mut rng)
    }

    async fn load(&self, bundle: &RecommendationBundle) -> Result<String> {
        let format = self.config.export_format();
        let data = export::render(bundle, format)?;
        let output_file = self.output_file();

        tracing::debug!("Writing {:?} export ({} bytes) to storage", format, data.len());
        self.storage.write_file(&output_file, &data).await?;

        Ok(output_file)
    }
}
