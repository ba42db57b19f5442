use gets_model::CategoryScores;

use crate::data::clamp_score;

/// `(data, coverage, rules, posture)` weights of the overall score.
pub const CATEGORY_WEIGHTS: [f64; 4] = [0.25, 0.35, 0.30, 0.10];

/// Weighted mean of the categories that are present; 0 if none are.
pub fn overall_score(scores: &CategoryScores) -> u8 {
    let categories = [scores.data, scores.coverage, scores.rules, scores.posture];
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (score, weight) in categories.into_iter().zip(CATEGORY_WEIGHTS) {
        if let Some(score) = score {
            weighted += f64::from(score) * weight;
            weight_sum += weight;
        }
    }
    if weight_sum == 0.0 {
        return 0;
    }
    clamp_score(weighted / weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_all_categories() {
        let scores = CategoryScores {
            data: Some(80),
            coverage: Some(60),
            rules: Some(100),
            posture: Some(50),
        };
        // 20 + 21 + 30 + 5
        assert_eq!(overall_score(&scores), 76);
    }

    #[test]
    fn renormalises_over_present_categories() {
        let scores = CategoryScores {
            data: None,
            coverage: Some(100),
            rules: Some(40),
            posture: None,
        };
        // (35 + 12) / 0.65
        assert_eq!(overall_score(&scores), 72);
    }

    #[test]
    fn no_categories_scores_zero() {
        assert_eq!(overall_score(&CategoryScores::default()), 0);
    }
}
