use crate::core::{ExportFormat, RecommendationBundle, Result};
use crate::utils::error::RecommenderError;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const RECOMMENDATIONS_CSV: &str = "travel_recommendations.csv";
pub const ITINERARY_CSV: &str = "itinerary.csv";
pub const BUNDLE_JSON: &str = "bundle.json";

/// 下載表格的欄位順序，目錄有名稱欄位時才輸出 `Name`
pub fn recommendation_headers(include_name: bool) -> Vec<&'static str> {
    let mut headers = vec!["DestinationID"];
    if include_name {
        headers.push("Name");
    }
    headers.extend([
        "State",
        "Type",
        "UserName",
        "Interests",
        "TravelStyle",
        "DurationDays",
        "EstimatedCost",
    ]);
    headers
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| RecommenderError::IoError(e.into_error()))
}

/// 推薦結果表格，每個目的地一列，附上使用者資料
pub fn recommendations_csv(bundle: &RecommendationBundle) -> Result<Vec<u8>> {
    if bundle.recommendations.is_empty() {
        return Err(RecommenderError::ExportError {
            message: "bundle has no recommendations".to_string(),
        });
    }

    let include_name = bundle.catalog_schema.has_name;
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(recommendation_headers(include_name))?;

    let preferences = &bundle.preferences;
    let interests = preferences.interest_labels().join(", ");
    let duration = preferences.duration_days.to_string();
    let cost = bundle.estimated_cost().to_string();

    for candidate in &bundle.recommendations {
        let destination = &candidate.destination;
        let mut row: Vec<&str> = vec![destination.id.as_str()];
        if include_name {
            row.push(destination.name.as_deref().unwrap_or(""));
        }
        row.extend([
            destination.state.as_str(),
            destination.kind.as_str(),
            preferences.name.as_str(),
            interests.as_str(),
            preferences.travel_style.label(),
            duration.as_str(),
            cost.as_str(),
        ]);
        writer.write_record(&row)?;
    }

    finish_csv(writer)
}

pub fn itinerary_csv(bundle: &RecommendationBundle) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Day", "Activity"])?;
    for entry in &bundle.itinerary.entries {
        writer.write_record([entry.day.to_string(), entry.activity.clone()])?;
    }
    finish_csv(writer)
}

pub fn bundle_json(bundle: &RecommendationBundle) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(bundle)?)
}

pub fn bundle_zip(bundle: &RecommendationBundle) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>(RECOMMENDATIONS_CSV, FileOptions::default())?;
    zip.write_all(&recommendations_csv(bundle)?)?;

    zip.start_file::<_, ()>(ITINERARY_CSV, FileOptions::default())?;
    zip.write_all(&itinerary_csv(bundle)?)?;

    zip.start_file::<_, ()>(BUNDLE_JSON, FileOptions::default())?;
    zip.write_all(&bundle_json(bundle)?)?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

pub fn render(bundle: &RecommendationBundle, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => recommendations_csv(bundle),
        ExportFormat::Json => bundle_json(bundle),
        ExportFormat::Zip => bundle_zip(bundle),
    }
}
