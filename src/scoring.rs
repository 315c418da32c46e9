//! Score model for mention-rate profiles.
//!
//! Each mention carries a fixed weight on a 0-10 scale. A name's score is the
//! weighted sum of its rates, so a name where every candidate got the
//! félicitations scores 10 and one where nobody got a mention scores 0.

use crate::record::{Mention, NameRecord};
use serde::Serialize;
use std::fmt;

/// Weight of each mention in the score.
pub const fn mention_weight(mention: Mention) -> f64 {
    match mention {
        Mention::Sm => 0.0,
        Mention::Ab => 4.0,
        Mention::B => 6.0,
        Mention::Tb => 8.0,
        Mention::Fel => 10.0,
    }
}

/// Weighted score in `[0, 10]` for rates in `[0, 1]`.
pub fn score(record: &NameRecord) -> f64 {
    Mention::ALL
        .iter()
        .map(|&mention| mention_score(record, mention))
        .sum()
}

/// Contribution of a single mention to [`score`].
pub fn mention_score(record: &NameRecord, mention: Mention) -> f64 {
    record.rate(mention) * mention_weight(mention)
}

/// Threshold classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RankingCategory {
    Passable,
    AssezBien,
    Bien,
    TresBien,
    Excellent,
}

impl RankingCategory {
    /// Classify a score:
    /// - Excellent: >= 8
    /// - Très bien: >= 6
    /// - Bien: >= 4
    /// - Assez bien: >= 2
    /// - Passable: below 2
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::TresBien
        } else if score >= 4.0 {
            Self::Bien
        } else if score >= 2.0 {
            Self::AssezBien
        } else {
            Self::Passable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::TresBien => "Très bien",
            Self::Bien => "Bien",
            Self::AssezBien => "Assez bien",
            Self::Passable => "Passable",
        }
    }
}

impl fmt::Display for RankingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shorthand for `RankingCategory::from_score`.
pub fn ranking_category(score: f64) -> RankingCategory {
    RankingCategory::from_score(score)
}

/// Coarse profile type derived from the normalized global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileType {
    Excellent,
    Bon,
    Moyen,
    Faible,
}

impl ProfileType {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Profil de réussite élevée avec de nombreuses mentions",
            Self::Bon => "Profil de bonne réussite scolaire",
            Self::Moyen => "Profil de réussite dans la moyenne",
            Self::Faible => "Profil avec des difficultés scolaires",
        }
    }
}

/// Summary of how a name's results are distributed across mentions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MentionProfile {
    /// Mention with the highest rate
    pub dominant: Mention,
    /// `(ab + 2b + 3tb + 4fel) / 4`, in `[0, 1]`
    pub global_score: f64,
    pub profile_type: ProfileType,
}

/// Classify a name's mention distribution.
///
/// Ties for the dominant mention keep the lower mention.
pub fn analyze_profile(record: &NameRecord) -> MentionProfile {
    let mut dominant = Mention::Sm;
    for mention in Mention::ALL {
        if record.rate(mention) > record.rate(dominant) {
            dominant = mention;
        }
    }

    let global_score = (record.ab + record.b * 2.0 + record.tb * 3.0 + record.fel * 4.0) / 4.0;
    let profile_type = if global_score >= 0.7 {
        ProfileType::Excellent
    } else if global_score >= 0.5 {
        ProfileType::Bon
    } else if global_score >= 0.3 {
        ProfileType::Moyen
    } else {
        ProfileType::Faible
    };

    MentionProfile {
        dominant,
        global_score,
        profile_type,
    }
}

/// Color bucket for an item at `position` (0-based) in a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingColor {
    Green,
    Yellow,
    Red,
    Blue,
}

impl RankingColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#22C55E",
            Self::Yellow => "#EAB308",
            Self::Red => "#EF4444",
            Self::Blue => "#3B82F6",
        }
    }
}

/// First is green, last is red, everything between is yellow; a lone item is blue.
pub const fn ranking_color(position: usize, total: usize) -> RankingColor {
    if total <= 1 {
        return RankingColor::Blue;
    }
    if position == 0 {
        RankingColor::Green
    } else if position + 1 >= total {
        RankingColor::Red
    } else {
        RankingColor::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use assert2::check;
    use rstest::rstest;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case([1.0, 0.0, 0.0, 0.0, 0.0], 0.0)]
    #[case([0.0, 0.0, 0.0, 0.0, 1.0], 10.0)]
    #[case([0.0, 1.0, 0.0, 0.0, 0.0], 4.0)]
    #[case([0.35, 0.05, 0.10, 0.20, 0.30], 5.4)]
    #[case([0.2, 0.2, 0.2, 0.2, 0.2], 5.6)]
    fn test_score(#[case] rates: [f64; 5], #[case] expected: f64) {
        check!(approx(score(&record("x", 100, rates)), expected));
    }

    #[test]
    fn test_score_is_monotonic_per_component() {
        let base = record("x", 100, [0.1, 0.1, 0.1, 0.1, 0.1]);
        for mention in Mention::ALL.into_iter().filter(|&m| m != Mention::Sm) {
            let mut bumped = base.clone();
            match mention {
                Mention::Ab => bumped.ab += 0.1,
                Mention::B => bumped.b += 0.1,
                Mention::Tb => bumped.tb += 0.1,
                Mention::Fel => bumped.fel += 0.1,
                Mention::Sm => unreachable!(),
            }
            check!(score(&bumped) > score(&base), "raising {:?} should raise the score", mention);
        }
    }

    #[rstest]
    #[case(10.0, RankingCategory::Excellent)]
    #[case(8.0, RankingCategory::Excellent)]
    #[case(7.99, RankingCategory::TresBien)]
    #[case(6.0, RankingCategory::TresBien)]
    #[case(4.0, RankingCategory::Bien)]
    #[case(2.0, RankingCategory::AssezBien)]
    #[case(1.99, RankingCategory::Passable)]
    #[case(0.0, RankingCategory::Passable)]
    fn test_ranking_category(#[case] score: f64, #[case] expected: RankingCategory) {
        check!(ranking_category(score) == expected);
    }

    #[test]
    fn test_category_labels() {
        check!(RankingCategory::TresBien.to_string() == "Très bien");
        check!(RankingCategory::AssezBien.label() == "Assez bien");
    }

    #[test]
    fn test_mention_score() {
        let r = record("x", 100, [0.1, 0.2, 0.3, 0.25, 0.15]);
        check!(approx(mention_score(&r, Mention::Tb), 2.0));
        check!(approx(mention_score(&r, Mention::Sm), 0.0));
    }

    #[rstest]
    #[case([0.0, 0.0, 0.0, 0.2, 0.8], Mention::Fel, ProfileType::Excellent)]
    #[case([0.1, 0.1, 0.2, 0.4, 0.2], Mention::Tb, ProfileType::Bon)]
    #[case([0.4, 0.3, 0.2, 0.1, 0.0], Mention::Sm, ProfileType::Faible)]
    #[case([0.3, 0.3, 0.2, 0.2, 0.0], Mention::Sm, ProfileType::Moyen)]
    fn test_analyze_profile(
        #[case] rates: [f64; 5],
        #[case] dominant: Mention,
        #[case] profile_type: ProfileType,
    ) {
        let profile = analyze_profile(&record("x", 100, rates));
        check!(profile.dominant == dominant);
        check!(profile.profile_type == profile_type);
    }

    #[rstest]
    #[case(0, 1, RankingColor::Blue)]
    #[case(0, 2, RankingColor::Green)]
    #[case(1, 2, RankingColor::Red)]
    #[case(0, 4, RankingColor::Green)]
    #[case(2, 4, RankingColor::Yellow)]
    #[case(3, 4, RankingColor::Red)]
    fn test_ranking_color(
        #[case] position: usize,
        #[case] total: usize,
        #[case] expected: RankingColor,
    ) {
        check!(ranking_color(position, total) == expected);
    }
}
