use crate::core::{DestinationRecord, Profile, UserPreferences};

/// 興趣 (依選取順序)、旅遊風格、氣候
pub fn user_profile(preferences: &UserPreferences) -> Profile {
    let mut parts: Vec<&str> = preferences.interest_labels();
    parts.push(preferences.travel_style.label());
    parts.push(preferences.climate.label());

    Profile::new(
        parts
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// 類型與最佳旅遊時間，空欄位略過
pub fn destination_profile(destination: &DestinationRecord) -> Profile {
    let text = [
        destination.kind.as_str(),
        destination.best_time_to_visit.as_str(),
    ]
    .iter()
    .map(|part| part.trim())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

    Profile::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Climate, Gender, Interest, TravelStyle};

    fn preferences(interests: Vec<Interest>) -> UserPreferences {
        UserPreferences {
            name: "Ravi".to_string(),
            age: 28,
            gender: Gender::Male,
            budget: 5000.0,
            duration_days: 3,
            group_size: 2,
            interests,
            travel_style: TravelStyle::Explorer,
            climate: Climate::Warm,
        }
    }

    #[test]
    fn test_user_profile_order() {
        let profile = user_profile(&preferences(vec![Interest::Food, Interest::Nature]));
        assert_eq!(profile.as_str(), "Food Nature Explorer Warm");
    }

    #[test]
    fn test_user_profile_without_interests() {
        let profile = user_profile(&preferences(vec![]));
        assert!(!profile.is_empty());
        assert_eq!(profile.as_str(), "Explorer Warm");
    }

    #[test]
    fn test_destination_profile_missing_fields() {
        let mut destination = DestinationRecord {
            id: "1".to_string(),
            name: None,
            state: "Goa".to_string(),
            kind: "Beach".to_string(),
            preferred_climate: "Warm".to_string(),
            budget: Some(4000.0),
            best_time_to_visit: "Winter".to_string(),
        };
        assert_eq!(destination_profile(&destination).as_str(), "Beach Winter");

        destination.best_time_to_visit.clear();
        assert_eq!(destination_profile(&destination).as_str(), "Beach");

        destination.kind.clear();
        assert!(destination_profile(&destination).is_empty());
    }
}
