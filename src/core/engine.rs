use crate::core::pipeline::RecommendationPipeline;
use crate::core::{ConfigProvider, Pipeline, RecommendationBundle, Storage, UserPreferences};
use crate::utils::error::Result;
use crate::utils::monitor::PipelineMonitor;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub bundle: RecommendationBundle,
    pub output_path: String,
}

pub struct RecommendationEngine<P: Pipeline> {
    pipeline: P,
    monitor: PipelineMonitor,
}

impl<P: Pipeline> RecommendationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: PipelineMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitor.is_enabled()
    }

    /// 處理一次表單送出
    pub async fn run(&self, preferences: &UserPreferences) -> Result<RunOutcome> {
        tracing::info!("Starting recommendation for '{}'", preferences.name);

        let catalog = self.pipeline.extract().await?;
        tracing::info!("Catalog has {} destinations", catalog.len());
        self.monitor.log_phase("Catalog");

        let bundle = self.pipeline.transform(catalog, preferences).await?;
        for warning in &bundle.warnings {
            tracing::warn!("⚠️ {}", warning);
        }
        self.monitor.log_phase("Recommend");

        let output_path = self.pipeline.load(&bundle).await?;
        tracing::info!("📁 Recommendations saved to: {}", output_path);
        self.monitor.log_phase("Export");
        self.monitor.log_final_stats();

        Ok(RunOutcome {
            bundle,
            output_path,
        })
    }
}

impl<S: Storage, C: ConfigProvider> RecommendationEngine<RecommendationPipeline<S, C>> {
    /// 依設定決定是否啟用監控
    pub fn from_pipeline(pipeline: RecommendationPipeline<S, C>) -> Self {
        let monitor_enabled = pipeline.config().monitoring_enabled();
        Self::new_with_monitoring(pipeline, monitor_enabled)
    }
}
