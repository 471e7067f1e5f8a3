use crate::core::{Itinerary, ItineraryEntry, TravelStyle};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_ACTIVITIES: [&str; 1] = ["Local Exploration"];
pub const DEFAULT_DAILY_COST: u64 = 2000;

const EXPLORER_ACTIVITIES: [&str; 3] = ["Trekking", "Nature Walk", "Local Adventure"];
const RELAXED_ACTIVITIES: [&str; 3] = ["Beach Walk", "Spa Session", "Leisure Shopping"];
const URBAN_ACTIVITIES: [&str; 3] = ["City Tour", "Café Hopping", "Nightlife"];
const CULTURAL_ACTIVITIES: [&str; 3] = ["Temple Visit", "Museum Tour", "Folk Performance"];

pub fn activities_for(style: &TravelStyle) -> &'static [&'static str] {
    match style {
        TravelStyle::Explorer => &EXPLORER_ACTIVITIES,
        TravelStyle::Relaxed => &RELAXED_ACTIVITIES,
        TravelStyle::Urban => &URBAN_ACTIVITIES,
        TravelStyle::Cultural => &CULTURAL_ACTIVITIES,
        TravelStyle::Other(_) => &DEFAULT_ACTIVITIES,
    }
}

/// 每人每日基本花費
pub fn base_daily_cost(style: &TravelStyle) -> u64 {
    match style {
        TravelStyle::Explorer => 2000,
        TravelStyle::Relaxed => 2500,
        TravelStyle::Urban => 3000,
        TravelStyle::Cultural => 1800,
        TravelStyle::Other(_) => DEFAULT_DAILY_COST,
    }
}

// 超出範圍時取上限，不溢位
pub fn estimate_cost(style: &TravelStyle, duration_days: u32, group_size: u32) -> u64 {
    u64::from(duration_days)
        .saturating_mul(base_daily_cost(style))
        .saturating_mul(u64::from(group_size))
}

/// 每天抽一個活動，可重複
pub fn plan_activities<R: Rng + ?Sized>(
    style: &TravelStyle,
    duration_days: u32,
    rng: &mut R,
) -> Vec<ItineraryEntry> {
    let activities = activities_for(style);
    (1..=duration_days)
        .map(|day| ItineraryEntry {
            day,
            activity: activities
                .choose(rng)
                .copied()
                .unwrap_or(DEFAULT_ACTIVITIES[0])
                .to_string(),
        })
        .collect()
}

pub fn generate_itinerary<R: Rng + ?Sized>(
    destination: &str,
    style: &TravelStyle,
    duration_days: u32,
    group_size: u32,
    rng: &mut R,
) -> Itinerary {
    let entries = plan_activities(style, duration_days, rng);
    let estimated_cost = estimate_cost(style, duration_days, group_size);

    tracing::debug!(
        "Planned {} days at {} for a group of {} ({})",
        entries.len(),
        destination,
        group_size,
        estimated_cost
    );

    Itinerary {
        destination: destination.to_string(),
        entries,
        estimated_cost,
    }
}
