use crate::core::RecommendationBundle;
use std::fmt::Write;

pub fn recommendations_table(bundle: &RecommendationBundle) -> String {
    let include_name = bundle.catalog_schema.has_name;

    let mut headers = vec!["#", "DestinationID"];
    if include_name {
        headers.push("Name");
    }
    headers.extend(["State", "Type", "Score"]);

    let rows: Vec<Vec<String>> = bundle
        .recommendations
        .iter()
        .enumerate()
        .map(|(rank, candidate)| {
            let destination = &candidate.destination;
            let mut row = vec![(rank + 1).to_string(), destination.id.clone()];
            if include_name {
                row.push(destination.name.clone().unwrap_or_default());
            }
            row.push(destination.state.clone());
            row.push(destination.kind.clone());
            row.push(format!("{:.3}", candidate.score));
            row
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let format_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", format_line(&headers[..]));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", format_line(&cells[..]));
    }
    out
}

pub fn itinerary_lines(bundle: &RecommendationBundle) -> String {
    let itinerary = &bundle.itinerary;
    let mut out = format!(
        "Your {}-Day Itinerary for {}\n",
        bundle.preferences.duration_days, itinerary.destination
    );
    for entry in &itinerary.entries {
        let _ = writeln!(out, "Day {}: {}", entry.day, entry.activity);
    }
    out
}

pub fn cost_message(bundle: &RecommendationBundle) -> String {
    format!(
        "Estimated Cost for {} people: ₹{}",
        bundle.preferences.group_size,
        bundle.estimated_cost()
    )
}

/// 完整的終端輸出：警告、推薦表、行程、花費
pub fn render_report(bundle: &RecommendationBundle) -> String {
    let mut out = String::new();
    for warning in &bundle.warnings {
        let _ = writeln!(out, "⚠️  {}", warning);
    }
    if !bundle.warnings.is_empty() {
        out.push('\n');
    }

    out.push_str("🎯 Top Travel Recommendations:\n");
    out.push_str(&recommendations_table(bundle));
    out.push('\n');
    out.push_str("🗓️ ");
    out.push_str(&itinerary_lines(bundle));
    out.push('\n');
    let _ = writeln!(out, "💰 {}", cost_message(bundle));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        CatalogSchema, Climate, DestinationRecord, Gender, Itinerary, ItineraryEntry,
        RankedCandidate, TravelStyle, UserPreferences,
    };

    fn bundle(has_name: bool, warnings: Vec<String>) -> RecommendationBundle {
        RecommendationBundle {
            preferences: UserPreferences {
                name: "Sam".to_string(),
                age: 22,
                gender: Gender::Male,
                budget: 3000.0,
                duration_days: 2,
                group_size: 4,
                interests: vec![],
                travel_style: TravelStyle::Urban,
                climate: Climate::Moderate,
            },
            recommendations: vec![RankedCandidate {
                destination: DestinationRecord {
                    id: "5".to_string(),
                    name: has_name.then(|| "Bengaluru".to_string()),
                    state: "Karnataka".to_string(),
                    kind: "City".to_string(),
                    preferred_climate: "Moderate".to_string(),
                    budget: Some(2500.0),
                    best_time_to_visit: "All Year".to_string(),
                },
                score: 0.5,
                catalog_index: 0,
            }],
            itinerary: Itinerary {
                destination: if has_name { "Bengaluru" } else { "5" }.to_string(),
                entries: vec![
                    ItineraryEntry {
                        day: 1,
                        activity: "City Tour".to_string(),
                    },
                    ItineraryEntry {
                        day: 2,
                        activity: "Nightlife".to_string(),
                    },
                ],
                estimated_cost: 24000,
            },
            filter_fallback: !warnings.is_empty(),
            warnings,
            catalog_schema: CatalogSchema { has_name },
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_table_columns_follow_schema() {
        let with_name = recommendations_table(&bundle(true, vec![]));
        assert!(with_name.lines().next().unwrap().contains("Name"));
        assert!(with_name.contains("Bengaluru"));
        assert!(with_name.contains("0.500"));

        let without_name = recommendations_table(&bundle(false, vec![]));
        assert!(!without_name.lines().next().unwrap().contains("Name"));
    }

    #[test]
    fn test_itinerary_and_cost() {
        let b = bundle(true, vec![]);
        assert_eq!(
            itinerary_lines(&b),
            "Your 2-Day Itinerary for Bengaluru\nDay 1: City Tour\nDay 2: Nightlife\n"
        );
        assert_eq!(cost_message(&b), "Estimated Cost for 4 people: ₹24000");
    }

    #[test]
    fn test_report_shows_warnings_first() {
        let report = render_report(&bundle(false, vec!["No match".to_string()]));
        assert!(report.starts_with("⚠️  No match"));
        assert!(report.contains("Day 2: Nightlife"));
    }
}
