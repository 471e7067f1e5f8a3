use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 目錄中的一個目的地，載入後不再變動
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub id: String,
    pub name: Option<String>,
    pub state: String,
    pub kind: String,
    pub preferred_climate: String,
    /// 欄位為空或不是數字時為 `None`
    pub budget: Option<f64>,
    pub best_time_to_visit: String,
}

impl DestinationRecord {
    /// 有名稱時顯示名稱，否則顯示 DestinationID
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// 目錄提供了哪些選用欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub has_name: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub records: Vec<DestinationRecord>,
    pub schema: CatalogSchema,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Food,
    Adventure,
    Wellness,
    Culture,
    Nature,
    Spiritual,
}

impl Interest {
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Food => "Food",
            Interest::Adventure => "Adventure",
            Interest::Wellness => "Wellness",
            Interest::Culture => "Culture",
            Interest::Nature => "Nature",
            Interest::Spiritual => "Spiritual",
        }
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Cool,
    Warm,
    Moderate,
}

impl Climate {
    pub fn label(&self) -> &'static str {
        match self {
            Climate::Cool => "Cool",
            Climate::Warm => "Warm",
            Climate::Moderate => "Moderate",
        }
    }
}

/// 旅遊風格；表單只提供四種，其他值保留原字串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelStyle {
    Explorer,
    Relaxed,
    Urban,
    Cultural,
    Other(String),
}

impl TravelStyle {
    pub const FORM_CHOICES: [&'static str; 4] = ["Explorer", "Relaxed", "Urban", "Cultural"];

    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "explorer" => TravelStyle::Explorer,
            "relaxed" => TravelStyle::Relaxed,
            "urban" => TravelStyle::Urban,
            "cultural" => TravelStyle::Cultural,
            _ => TravelStyle::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TravelStyle::Explorer => "Explorer",
            TravelStyle::Relaxed => "Relaxed",
            TravelStyle::Urban => "Urban",
            TravelStyle::Cultural => "Cultural",
            TravelStyle::Other(label) => label,
        }
    }
}

impl From<String> for TravelStyle {
    fn from(value: String) -> Self {
        TravelStyle::from_label(&value)
    }
}

impl From<TravelStyle> for String {
    fn from(value: TravelStyle) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub budget: f64,
    pub duration_days: u32,
    pub group_size: u32,
    pub interests: Vec<Interest>,
    pub travel_style: TravelStyle,
    pub climate: Climate,
}

impl UserPreferences {
    /// 依選取順序的興趣標籤，去除重複
    pub fn interest_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            let label = interest.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

/// 使用者或目的地的文字描述，只在計算相似度時使用
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile(String);

impl Profile {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub destination: DestinationRecord,
    pub score: f64,
    /// 目的地在目錄中的位置
    pub catalog_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub day: u32,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub entries: Vec<ItineraryEntry>,
    pub estimated_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub preferences: UserPreferences,
    pub recommendations: Vec<RankedCandidate>,
    pub itinerary: Itinerary,
    pub filter_fallback: bool,
    pub warnings: Vec<String>,
    pub catalog_schema: CatalogSchema,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationBundle {
    pub fn top(&self) -> Option<&RankedCandidate> {
        self.recommendations.first()
    }

    pub fn estimated_cost(&self) -> u64 {
        self.itinerary.estimated_cost
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Zip,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Zip => "zip",
        }
    }
}
