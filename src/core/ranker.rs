use crate::core::profile::destination_profile;
use crate::core::{DestinationRecord, Profile, RankedCandidate};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// 每次請求回傳的目的地數量
pub const MAX_RECOMMENDATIONS: usize = 3;

// 兩個字元以上的詞，單一字元忽略
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 以詞為鍵的稀疏權重，排序固定使加總可重現
pub type SparseVector = BTreeMap<String, f64>;

/// 以單次請求語料計算的 TF-IDF 權重
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    idf: BTreeMap<String, f64>,
}

impl TfidfVectorizer {
    /// 平滑 IDF：`ln((1 + n) / (1 + df)) + 1`
    pub fn fit(documents: &[&str]) -> Self {
        let total_docs = documents.len() as f64;
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique: HashSet<String> = tokenize(doc).into_iter().collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let idf = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + total_docs) / (1.0 + df as f64)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        Self { idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// 詞頻乘上 IDF 後做 L2 正規化，未知詞忽略
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut vector = SparseVector::new();
        for token in tokenize(document) {
            if let Some(idf) = self.idf.get(&token) {
                *vector.entry(token).or_insert(0.0) += idf;
            }
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }
        vector
    }
}

pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .fold(0.0, |acc, product| acc + product);

    let similarity = dot / (norm_a * norm_b);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

/// 計算每個候選與使用者描述的相似度，保留前 [`MAX_RECOMMENDATIONS`] 名。
/// 同分維持目錄順序
pub fn rank_candidates(
    candidates: &[(usize, &DestinationRecord)],
    user_profile: &Profile,
) -> Vec<RankedCandidate> {
    let destination_profiles: Vec<Profile> = candidates
        .iter()
        .map(|(_, destination)| destination_profile(destination))
        .collect();

    let mut corpus: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
    corpus.push(user_profile.as_str());
    corpus.extend(destination_profiles.iter().map(Profile::as_str));

    let vectorizer = TfidfVectorizer::fit(&corpus);
    let scores: Vec<f64> = if vectorizer.vocabulary_size() == 0 {
        tracing::warn!("Profiles produced an empty vocabulary, keeping catalog order");
        vec![0.0; candidates.len()]
    } else {
        let user_vector = vectorizer.transform(user_profile.as_str());
        destination_profiles
            .iter()
            .map(|profile| cosine_similarity(&user_vector, &vectorizer.transform(profile.as_str())))
            .collect()
    };

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .zip(scores)
        .map(|((catalog_index, destination), score)| RankedCandidate {
            destination: (*destination).clone(),
            score,
            catalog_index: *catalog_index,
        })
        .collect();

    // sort_by 是穩定排序，同分保留原順序；0.0 與 -0.0 視為同分
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        "Ranked {} candidates, top score {:.4}",
        candidates.len(),
        ranked.first().map(|c| c.score).unwrap_or(0.0)
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(id: &str, kind: &str, season: &str) -> DestinationRecord {
        DestinationRecord {
            id: id.to_string(),
            name: Some(format!("Place {}", id)),
            state: "State".to_string(),
            kind: kind.to_string(),
            preferred_climate: "Warm".to_string(),
            budget: Some(3000.0),
            best_time_to_visit: season.to_string(),
        }
    }

    fn indexed(records: &[DestinationRecord]) -> Vec<(usize, &DestinationRecord)> {
        records.iter().enumerate().collect()
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(
            tokenize("Hill Station a B Café-Hopping"),
            vec!["hill", "station", "café", "hopping"]
        );
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = TfidfVectorizer::fit(&["beach winter", "beach summer"]);
        assert_eq!(vectorizer.vocabulary_size(), 3);
        assert!((vectorizer.idf("beach").unwrap() - 1.0).abs() < 1e-12);
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((vectorizer.idf("winter").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let vectorizer = TfidfVectorizer::fit(&["nature walk", "nature trek trek"]);
        let vector = vectorizer.transform("nature trek trek");
        let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(vector["trek"] > vector["nature"]);
    }

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let empty = SparseVector::new();
        let mut other = SparseVector::new();
        other.insert("beach".to_string(), 1.0);
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
        assert!((cosine_similarity(&other, &other) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_prefers_overlapping_profiles() {
        let records = vec![
            destination("1", "Historical", "Winter"),
            destination("2", "Nature Reserve", "Winter"),
            destination("3", "Beach", "Summer"),
            destination("4", "Food Street", "Monsoon"),
        ];
        let user = Profile::new("Food Nature Explorer Warm");

        let ranked = rank_candidates(&indexed(&records), &user);

        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert!(ranked[0].score > 0.0);
        let top_two: Vec<&str> = ranked[..2].iter().map(|c| c.destination.id.as_str()).collect();
        assert!(top_two.contains(&"2"));
        assert!(top_two.contains(&"4"));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let records = vec![
            destination("a", "Beach", "Winter"),
            destination("b", "Beach", "Winter"),
            destination("c", "Beach", "Winter"),
            destination("d", "Beach", "Winter"),
        ];
        let ranked = rank_candidates(&indexed(&records), &Profile::new("Relaxed Warm"));

        let ids: Vec<&str> = ranked.iter().map(|c| c.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(
            ranked.iter().map(|c| c.catalog_index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_rank_zero_scores_tie_regardless_of_profile() {
        // 1 與使用者無共同詞，2 的描述為空，兩者皆為 0 分
        let records = vec![
            destination("1", "Beach", "Winter"),
            destination("2", "", ""),
            destination("3", "Explorer", "Summer"),
        ];
        let ranked = rank_candidates(&indexed(&records), &Profile::new("Explorer Warm"));

        let ids: Vec<&str> = ranked.iter().map(|c| c.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        for candidate in &ranked[1..] {
            assert!(candidate.score.is_sign_positive());
            assert_eq!(format!("{:.3}", candidate.score), "0.000");
        }
    }

    #[test]
    fn test_cosine_without_shared_terms_is_positive_zero() {
        let mut a = SparseVector::new();
        a.insert("beach".to_string(), 1.0);
        let mut b = SparseVector::new();
        b.insert("hill".to_string(), 1.0);
        let similarity = cosine_similarity(&a, &b);
        assert_eq!(similarity, 0.0);
        assert!(similarity.is_sign_positive());
    }

    #[test]
    fn test_rank_returns_all_when_fewer_than_limit() {
        let records = vec![destination("1", "Beach", "Winter"), destination("2", "Hill", "Summer")];
        let ranked = rank_candidates(&indexed(&records), &Profile::new("Explorer Cool"));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_degenerate_corpus_falls_back_to_order() {
        let records = vec![
            destination("1", "", ""),
            destination("2", "", ""),
            destination("3", "", ""),
            destination("4", "", ""),
        ];
        let ranked = rank_candidates(&indexed(&records), &Profile::new("x y"));

        let ids: Vec<&str> = ranked.iter().map(|c| c.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(ranked.iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn test_rank_is_deterministic() {
        let records = vec![
            destination("1", "Hill Station", "Summer"),
            destination("2", "Nature Park", "Winter"),
            destination("3", "Adventure Sports", "Winter"),
            destination("4", "Nature Trail", "Summer"),
        ];
        let user = Profile::new("Adventure Nature Explorer Cool");
        let first = rank_candidates(&indexed(&records), &user);
        let second = rank_candidates(&indexed(&records), &user);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_empty_candidates() {
        let ranked = rank_candidates(&[], &Profile::new("Explorer Warm"));
        assert!(ranked.is_empty());
    }
}
