//! Ranking - Alternatives ordered by descending WISP score.

use serde::Serialize;

use crate::domain::foundation::AlternativeId;

/// Weighted sum, weighted product, and blended score of one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WispScore {
    pub weighted_sum: f64,
    pub weighted_product: f64,
    pub final_score: f64,
}

/// One alternative's place in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    /// 1-based position.
    pub rank: usize,
    pub alternative: AlternativeId,
    pub score: f64,
    /// Position of the alternative in the input.
    pub input_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<WispScore>,
}

/// Alternatives sorted by descending score, ties kept in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    /// Sorts `(alternative, score, breakdown)` entries given in input order.
    pub(crate) fn from_input_order(
        entries: Vec<(AlternativeId, f64, Option<WispScore>)>,
    ) -> Self {
        let mut ranked: Vec<RankedAlternative> = entries
            .into_iter()
            .enumerate()
            .map(|(input_index, (alternative, score, breakdown))| RankedAlternative {
                rank: 0,
                alternative,
                score,
                input_index,
                breakdown,
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        for (position, entry) in ranked.iter_mut().enumerate() {
            entry.rank = position + 1;
        }

        Self { entries: ranked }
    }

    /// The top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Returns true if two or more alternatives share the top score.
    pub fn is_tied_at_top(&self) -> bool {
        match (self.entries.first(), self.entries.get(1)) {
            (Some(first), Some(second)) => first.score == second.score,
            _ => false,
        }
    }

    /// Finds an alternative's entry by label.
    pub fn position_of(&self, alternative: &str) -> Option<&RankedAlternative> {
        self.entries
            .iter()
            .find(|entry| entry.alternative.as_str() == alternative)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Ranking {
    type Item = RankedAlternative;
    type IntoIter = std::vec::IntoIter<RankedAlternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
