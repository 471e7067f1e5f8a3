use crate::core::filter::filter_candidates;
use crate::core::itinerary::generate_itinerary;
use crate::core::profile::user_profile;
use crate::core::ranker::rank_candidates;
use crate::core::{Catalog, RecommendationBundle, Result, UserPreferences};
use crate::utils::error::RecommenderError;
use crate::utils::validation::{validate_minimum, validate_range, Validate};
use rand::Rng;

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const MIN_BUDGET: f64 = 1000.0;
pub const DURATION_RANGE: (u32, u32) = (1, 15);
pub const GROUP_SIZE_RANGE: (u32, u32) = (1, 10);

pub const NO_MATCH_WARNING: &str =
    "No destinations found based on your budget and climate. Showing general options.";

impl Validate for UserPreferences {
    fn validate(&self) -> Result<()> {
        validate_range("age", self.age, AGE_RANGE.0, AGE_RANGE.1)?;
        if !self.budget.is_finite() {
            return Err(RecommenderError::InvalidValueError {
                field: "budget".to_string(),
                value: self.budget.to_string(),
                reason: "Budget must be a number".to_string(),
            });
        }
        validate_minimum("budget", self.budget, MIN_BUDGET)?;
        validate_range(
            "duration",
            self.duration_days,
            DURATION_RANGE.0,
            DURATION_RANGE.1,
        )?;
        validate_range(
            "group_size",
            self.group_size,
            GROUP_SIZE_RANGE.0,
            GROUP_SIZE_RANGE.1,
        )?;
        Ok(())
    }
}

/// 單次推薦：篩選 → 相似度排序 → 行程與花費
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    preferences: &UserPreferences,
    rng: &mut R,
) -> Result<RecommendationBundle> {
    preferences.validate()?;
    if catalog.is_empty() {
        return Err(RecommenderError::CatalogError {
            message: "catalog contains no destinations".to_string(),
        });
    }

    let profile = user_profile(preferences);
    tracing::debug!("User profile: '{}'", profile);

    let outcome = filter_candidates(catalog, preferences);
    let mut warnings = Vec::new();
    if outcome.fallback {
        warnings.push(NO_MATCH_WARNING.to_string());
    }

    let recommendations = rank_candidates(&outcome.candidates, &profile);
    let top = recommendations
        .first()
        .ok_or_else(|| RecommenderError::CatalogError {
            message: "no destination could be ranked".to_string(),
        })?;

    let itinerary = generate_itinerary(
        top.destination.display_name(),
        &preferences.travel_style,
        preferences.duration_days,
        preferences.group_size,
        rng,
    );

    tracing::info!(
        "🎯 Recommended {} destinations, top pick: {}",
        recommendations.len(),
        itinerary.destination
    );

    Ok(RecommendationBundle {
        preferences: preferences.clone(),
        recommendations,
        itinerary,
        filter_fallback: outcome.fallback,
        warnings,
        catalog_schema: catalog.schema,
        generated_at: chrono::Utc::now(),
    })
}
