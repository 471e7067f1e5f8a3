use clap::Parser;
use trip_recommender::core::report::render_report;
use trip_recommender::utils::error::{ErrorSeverity, RecommenderError};
use trip_recommender::utils::{logger, validation::Validate};
use trip_recommender::{CliConfig, LocalStorage, RecommendationEngine, RecommendationPipeline};

fn exit_with(e: &RecommenderError) -> ! {
    tracing::error!(
        "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trip-recommender");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let preferences = cli.preferences();
    if let Err(e) = preferences.validate() {
        exit_with(&e);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = RecommendationPipeline::new(storage, settings);
    let engine = RecommendationEngine::from_pipeline(pipeline);
    if engine.monitoring_enabled() {
        tracing::info!("🔍 Phase monitoring enabled");
    }

    match engine.run(&preferences).await {
        Ok(outcome) => {
            println!("{}", render_report(&outcome.bundle));
            println!("📥 Recommendations saved to: {}", outcome.output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
