use crate::core::{Catalog, DestinationRecord, UserPreferences};

/// 篩選結果；`fallback` 表示沒有符合條件的目的地，改用整份目錄
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    /// 通過篩選的目的地與其在目錄中的位置，維持目錄順序
    pub candidates: Vec<(usize, &'a DestinationRecord)>,
    pub fallback: bool,
}

impl FilterOutcome<'_> {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub fn matches_constraints(destination: &DestinationRecord, preferences: &UserPreferences) -> bool {
    let climate_ok = destination
        .preferred_climate
        .trim()
        .eq_ignore_ascii_case(preferences.climate.label());
    let budget_ok = destination
        .budget
        .is_some_and(|budget| budget <= preferences.budget);

    climate_ok && budget_ok
}

pub fn filter_candidates<'a>(catalog: &'a Catalog, preferences: &UserPreferences) -> FilterOutcome<'a> {
    let candidates: Vec<_> = catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, destination)| matches_constraints(destination, preferences))
        .collect();

    if candidates.is_empty() {
        tracing::warn!(
            "No destinations match climate '{}' within budget {}, using the full catalog",
            preferences.climate,
            preferences.budget
        );
        return FilterOutcome {
            candidates: catalog.records.iter().enumerate().collect(),
            fallback: true,
        };
    }

    tracing::debug!(
        "{} of {} destinations pass the climate/budget filter",
        candidates.len(),
        catalog.len()
    );
    FilterOutcome {
        candidates,
        fallback: false,
    }
}
