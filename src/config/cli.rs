use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{Climate, ExportFormat, Gender, Interest, TravelStyle, UserPreferences};
use crate::utils::error::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;

/// 表單欄位與執行設定
#[derive(Debug, Clone, Parser)]
#[command(name = "trip-recommender")]
#[command(about = "Recommend destinations and plan a day-by-day trip from your travel preferences")]
pub struct CliConfig {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Age (10-100)
    #[arg(long, default_value_t = 10)]
    pub age: u32,

    #[arg(long, value_enum, ignore_case = true, default_value = "male")]
    pub gender: Gender,

    /// Budget ceiling in ₹ (at least 1000)
    #[arg(long, default_value_t = 1000.0)]
    pub budget: f64,

    /// Trip duration in days (1-15)
    #[arg(long, default_value_t = 1)]
    pub duration: u32,

    /// Group size (1-10)
    #[arg(long, default_value_t = 1)]
    pub group_size: u32,

    /// Interests, comma separated
    #[arg(long, value_enum, ignore_case = true, value_delimiter = ',')]
    pub interests: Vec<Interest>,

    #[arg(
        long,
        ignore_case = true,
        default_value = "Explorer",
        value_parser = PossibleValuesParser::new(TravelStyle::FORM_CHOICES)
    )]
    pub travel_style: String,

    /// Preferred climate
    #[arg(long, value_enum, ignore_case = true, default_value = "cool")]
    pub climate: Climate,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Destination catalog CSV (overrides the settings file)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Directory for the downloadable export
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ExportFormat>,

    /// Seed for reproducible itineraries
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase timing and memory")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn preferences(&self) -> UserPreferences {
        let mut interests: Vec<Interest> = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            if !interests.contains(interest) {
                interests.push(*interest);
            }
        }

        UserPreferences {
            name: self.name.trim().to_string(),
            age: self.age,
            gender: self.gender,
            budget: self.budget,
            duration_days: self.duration,
            group_size: self.group_size,
            interests,
            travel_style: TravelStyle::from_label(&self.travel_style),
            climate: self.climate,
        }
    }

    /// 預設值 → TOML 檔 → 命令列覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path);
                TomlConfig::from_file(path)?.settings()
            }
            None => Settings::default(),
        };

        if let Some(catalog) = &self.catalog {
            settings.catalog_path = catalog.clone();
        }
        if let Some(output_path) = &self.output_path {
            settings.output_path = output_path.clone();
        }
        if let Some(format) = self.format {
            settings.export_format = format;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.monitoring |= self.monitor;

        Ok(settings)
    }
}
