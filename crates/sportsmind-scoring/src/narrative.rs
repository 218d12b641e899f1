//! Template-based narrative analysis of a score set.

use sportsmind_core::models::question::Target;
use sportsmind_core::models::subscale::{Category, Subcategory, SubscaleScores};
use sportsmind_core::models::test_result::Analysis;

use crate::athlete_type;

/// Self-affirmation sub-scales in the order the narrative considers them.
const SELF_AFFIRMATION_ORDER: [Subcategory; 4] = [
    Subcategory::SelfEfficacy,
    Subcategory::SelfDetermination,
    Subcategory::SelfAcceptance,
    Subcategory::SelfWorth,
];

/// Sub-scale score below which a targeted suggestion is made.
pub const IMPROVEMENT_THRESHOLD: f64 = 30.0;

pub const MAX_IMPROVEMENTS: usize = 5;

/// Number of athlete-mind sub-scales listed as strengths (and as weaknesses).
pub const STRENGTH_COUNT: usize = 5;

const GENERIC_IMPROVEMENTS: [&str; 3] = [
    "Set aside regular time to reflect on yourself.",
    "Focus on your own growth rather than comparing yourself with others.",
    "Treat failures as chances to learn.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfEsteemLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl SelfEsteemLevel {
    /// Bucket a self-esteem total (0–200).
    pub fn from_total(total: f64) -> Self {
        if total >= 160.0 {
            SelfEsteemLevel::Excellent
        } else if total >= 140.0 {
            SelfEsteemLevel::Good
        } else if total >= 120.0 {
            SelfEsteemLevel::Average
        } else {
            SelfEsteemLevel::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SelfEsteemLevel::Excellent => "excellent",
            SelfEsteemLevel::Good => "good",
            SelfEsteemLevel::Average => "average",
            SelfEsteemLevel::NeedsImprovement => "needs improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceLevel {
    Exceptional,
    Good,
    Fair,
    Uneven,
}

impl BalanceLevel {
    /// Bucket the mean of the five sportsmanship sub-scales.
    pub fn from_mean(mean: f64) -> Self {
        if mean >= 40.0 {
            BalanceLevel::Exceptional
        } else if mean >= 35.0 {
            BalanceLevel::Good
        } else if mean >= 30.0 {
            BalanceLevel::Fair
        } else {
            BalanceLevel::Uneven
        }
    }

    fn predicate(self) -> &'static str {
        match self {
            BalanceLevel::Exceptional => "is exceptionally well balanced",
            BalanceLevel::Good => "is well balanced",
            BalanceLevel::Fair => "is broadly balanced",
            BalanceLevel::Uneven => "has room to become more balanced",
        }
    }
}

/// Highest and lowest entries; the first one wins on ties.
fn extremes(pairs: &[(Subcategory, f64)]) -> Option<((Subcategory, f64), (Subcategory, f64))> {
    let (&first, rest) = pairs.split_first()?;
    let mut high = first;
    let mut low = first;
    for &pair in rest {
        if pair.1 > high.1 {
            high = pair;
        }
        if pair.1 < low.1 {
            low = pair;
        }
    }
    Some((high, low))
}

pub fn self_esteem_analysis(scores: &SubscaleScores) -> String {
    let total = scores.self_esteem_total();
    let level = SelfEsteemLevel::from_total(total);
    let pairs: Vec<_> = SELF_AFFIRMATION_ORDER
        .iter()
        .map(|&sub| (sub, scores.get(sub)))
        .collect();
    let Some(((high, high_score), (low, low_score))) = extremes(&pairs) else {
        return String::new();
    };

    format!(
        "Your overall self-esteem is rated \"{level}\" ({total:.1} / 200). \
         {high} is your strongest area ({high_score:.1} points), which is a real asset. \
         {low} ({low_score:.1} points) has the most room to grow. \
         Keeping the overall balance while strengthening the weaker areas will support further growth.",
        level = level.label(),
        high = high.label(),
        low = low.label(),
    )
}

fn targeted_improvement(sub: Subcategory) -> &'static str {
    match sub {
        Subcategory::SelfEfficacy => {
            "Set small goals and build confidence by stacking up successes."
        }
        Subcategory::SelfDetermination => {
            "Make everyday choices yourself to strengthen your sense of ownership."
        }
        Subcategory::SelfAcceptance => {
            "Look at your strengths and weaknesses objectively and practise accepting yourself as you are."
        }
        Subcategory::SelfWorth => {
            "Notice how you contribute to others and what your role means to feel your own value."
        }
        _ => "",
    }
}

/// Up to five suggestions: one per weak self-affirmation sub-scale, then
/// the generic suggestions.
pub fn self_esteem_improvements(scores: &SubscaleScores) -> Vec<String> {
    SELF_AFFIRMATION_ORDER
        .iter()
        .filter(|&&sub| scores.get(sub) < IMPROVEMENT_THRESHOLD)
        .map(|&sub| targeted_improvement(sub))
        .chain(GENERIC_IMPROVEMENTS)
        .take(MAX_IMPROVEMENTS)
        .map(str::to_string)
        .collect()
}

pub fn sportsmanship_balance(scores: &SubscaleScores) -> String {
    let level = BalanceLevel::from_mean(scores.sportsmanship_mean());
    let pairs = scores.category_scores(Category::Sportsmanship);
    let Some(((high, high_score), (low, low_score))) = extremes(&pairs) else {
        return String::new();
    };

    format!(
        "Your sportsmanship {predicate}. \
         {high} ({high_score:.1} points) stands out as a strength, \
         while {low} ({low_score:.1} points) has the most room to grow. \
         Working consciously on {low} will round out your sportsmanship.",
        predicate = level.predicate(),
        high = high.label(),
        low = low.label(),
    )
}

/// Top and bottom five athlete-mind sub-scales, both in descending score
/// order. Equal scores keep their canonical order.
pub fn strengths_and_weaknesses(scores: &SubscaleScores) -> (Vec<Subcategory>, Vec<Subcategory>) {
    let mut ranked = scores.category_scores(Category::AthleteMind);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let strengths = ranked
        .iter()
        .take(STRENGTH_COUNT)
        .map(|&(sub, _)| sub)
        .collect();
    let weaknesses = ranked
        .iter()
        .skip(ranked.len().saturating_sub(STRENGTH_COUNT))
        .map(|&(sub, _)| sub)
        .collect();
    (strengths, weaknesses)
}

/// Build the full analysis for a score set.
pub fn analyze(scores: &SubscaleScores, target: Target) -> Analysis {
    let classification = athlete_type::classify(scores, target);
    let (strengths, weaknesses) = strengths_and_weaknesses(scores);

    Analysis {
        athlete_type: classification.athlete_type,
        athlete_type_description: classification.description,
        athlete_type_distribution: classification.distribution,
        strengths,
        weaknesses,
        self_esteem_analysis: self_esteem_analysis(scores),
        self_esteem_improvements: self_esteem_improvements(scores),
        sportsmanship_balance: sportsmanship_balance(scores),
    }
}
