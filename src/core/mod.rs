pub mod catalog;
pub mod engine;
pub mod export;
pub mod filter;
pub mod itinerary;
pub mod pipeline;
pub mod profile;
pub mod ranker;
pub mod recommender;
pub mod report;

pub use crate::domain::model::{
    Catalog, CatalogSchema, DestinationRecord, ExportFormat, Itinerary, ItineraryEntry, Profile,
    RankedCandidate, RecommendationBundle, TravelStyle, UserPreferences,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
