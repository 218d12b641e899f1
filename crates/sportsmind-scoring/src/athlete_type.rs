//! Weighted classification of athlete-mind scores into five archetypes.

use std::collections::HashMap;

use sportsmind_core::models::athlete_type::{AthleteType, Classification, TypeScore};
use sportsmind_core::models::question::Target;
use sportsmind_core::models::subscale::{Subcategory, SubscaleScores};

use crate::scoring::{MAX_SUBSCALE_SCORE, round1};

type Profile = [(Subcategory, u32); 10];

const STRIKER: Profile = [
    (Subcategory::Result, 10),
    (Subcategory::Assertion, 9),
    (Subcategory::Intuition, 8),
    (Subcategory::Steadiness, 7),
    (Subcategory::SelfControl, 6),
    (Subcategory::Comparison, 5),
    (Subcategory::Devotion, 4),
    (Subcategory::Commitment, 3),
    (Subcategory::Sensitivity, 2),
    (Subcategory::Introspection, 1),
];

const ATTACKER: Profile = [
    (Subcategory::Result, 10),
    (Subcategory::Assertion, 9),
    (Subcategory::Intuition, 8),
    (Subcategory::SelfControl, 7),
    (Subcategory::Comparison, 6),
    (Subcategory::Steadiness, 5),
    (Subcategory::Devotion, 4),
    (Subcategory::Sensitivity, 3),
    (Subcategory::Commitment, 2),
    (Subcategory::Introspection, 1),
];

const GAMEMAKER: Profile = [
    (Subcategory::Steadiness, 10),
    (Subcategory::Introspection, 9),
    (Subcategory::Devotion, 8),
    (Subcategory::Comparison, 7),
    (Subcategory::Assertion, 6),
    (Subcategory::Commitment, 5),
    (Subcategory::Intuition, 4),
    (Subcategory::Sensitivity, 3),
    (Subcategory::SelfControl, 2),
    (Subcategory::Result, 1),
];

const DEFENDER: Profile = [
    (Subcategory::Steadiness, 10),
    (Subcategory::Devotion, 9),
    (Subcategory::Sensitivity, 8),
    (Subcategory::Introspection, 7),
    (Subcategory::Comparison, 6),
    (Subcategory::SelfControl, 5),
    (Subcategory::Assertion, 4),
    (Subcategory::Commitment, 3),
    (Subcategory::Result, 2),
    (Subcategory::Intuition, 1),
];

const ANCHOR: Profile = [
    (Subcategory::Steadiness, 10),
    (Subcategory::Devotion, 9),
    (Subcategory::Introspection, 8),
    (Subcategory::Sensitivity, 7),
    (Subcategory::SelfControl, 6),
    (Subcategory::Comparison, 5),
    (Subcategory::Commitment, 4),
    (Subcategory::Assertion, 3),
    (Subcategory::Result, 2),
    (Subcategory::Intuition, 1),
];

/// The emphasis profile (sub-scale, weight) of an archetype.
pub fn weights(athlete_type: AthleteType) -> &'static Profile {
    match athlete_type {
        AthleteType::Striker => &STRIKER,
        AthleteType::Attacker => &ATTACKER,
        AthleteType::Gamemaker => &GAMEMAKER,
        AthleteType::Defender => &DEFENDER,
        AthleteType::Anchor => &ANCHOR,
    }
}

/// Unrounded weighted fit, as a fraction of the best possible score.
fn fit_ratio(scores: &SubscaleScores, athlete_type: AthleteType) -> f64 {
    let (raw, max) = weights(athlete_type)
        .iter()
        .fold((0.0, 0.0), |(raw, max), &(sub, weight)| {
            let weight = f64::from(weight);
            (raw + scores.get(sub) * weight, max + MAX_SUBSCALE_SCORE * weight)
        });
    if max > 0.0 { raw / max } else { 0.0 }
}

/// Weighted fit of `scores` against an archetype, 0–100 rounded to one decimal.
pub fn fit(scores: &SubscaleScores, athlete_type: AthleteType) -> f64 {
    round1(100.0 * fit_ratio(scores, athlete_type))
}

/// Fit and share for every archetype, in priority order.
///
/// Shares are the fits renormalized to sum to 100. When every fit is zero
/// the shares are split evenly.
pub fn distribution(scores: &SubscaleScores) -> Vec<TypeScore> {
    let ratios: Vec<(AthleteType, f64)> = AthleteType::ALL
        .into_iter()
        .map(|t| (t, fit_ratio(scores, t)))
        .collect();
    let total: f64 = ratios.iter().map(|(_, r)| r).sum();
    let even = 100.0 / AthleteType::ALL.len() as f64;

    ratios
        .into_iter()
        .map(|(athlete_type, ratio)| TypeScore {
            athlete_type,
            fit: round1(100.0 * ratio),
            percentage: if total > 0.0 {
                round1(100.0 * ratio / total)
            } else {
                round1(even)
            },
        })
        .collect()
}

/// Archetype with the highest fit. Ties go to the earliest in priority
/// order (Striker, Attacker, Gamemaker, Defender, Anchor).
pub fn dominant(distribution: &[TypeScore]) -> AthleteType {
    let mut best: Option<&TypeScore> = None;
    for score in distribution {
        if best.is_none_or(|b| score.fit > b.fit) {
            best = Some(score);
        }
    }
    best.map(|b| b.athlete_type).unwrap_or(AthleteType::Gamemaker)
}

/// Classify a full score set.
pub fn classify(scores: &SubscaleScores, target: Target) -> Classification {
    let distribution = distribution(scores);
    let athlete_type = dominant(&distribution);
    Classification {
        athlete_type,
        description: description(athlete_type, target).to_string(),
        distribution,
    }
}

/// Classify from loosely keyed athlete-mind scores.
///
/// Missing sub-scales count as 0 and unknown keys are ignored.
pub fn classify_map(athlete_mind_scores: &HashMap<String, f64>, target: Target) -> Classification {
    let mut scores = SubscaleScores::default();
    for (key, &value) in athlete_mind_scores {
        match key.parse::<Subcategory>() {
            Ok(sub) if Subcategory::ATHLETE_MIND.contains(&sub) => scores.set(sub, value),
            _ => tracing::debug!(key = %key, "ignoring unknown athlete-mind key"),
        }
    }
    classify(&scores, target)
}

/// Audience-specific description of an archetype. Empty when no text is
/// written for the pairing.
pub fn description(athlete_type: AthleteType, target: Target) -> &'static str {
    use AthleteType::*;
    use Target::*;

    match (athlete_type, target) {
        (Striker, Player) => {
            "The striker temperament goes for goal in every game and creates decisive chances on its own. It keeps results in view and keeps moving forward."
        }
        (Striker, Coach) => {
            "As a coach, the striker temperament drafts tactics aggressively toward the goal, seizes chances during the game and leads players to victory. Acting yourself to produce results is what matters."
        }
        (Striker, Mother) => {
            "As a mother, the striker temperament shows the child which way to go and takes the initiative to get results. Holding a goal and continuing to challenge difficulties is what counts."
        }
        (Striker, Father) => {
            "As a father, the striker temperament leads the family by example and moves actively to reach its goals. Even in hard times it keeps pressing toward the target."
        }
        (Striker, Adult) => {
            "At work, the striker temperament sets its own targets and takes action to deliver them. It welcomes challenges, does not fear failure and keeps aiming for success."
        }
        (Attacker, Player) => {
            "The attacker temperament moves on its own toward the goal. It acts first and fights on the front line to produce results."
        }
        (Attacker, Coach) => {
            "As a coach, the attacker temperament takes on challenges, adapts flexibly and stays focused on results. A positive attitude lifts the players and grows the whole team."
        }
        (Attacker, Mother) => {
            "As a mother, the attacker temperament tackles problems positively. Stepping in actively with the child draws opportunities into daily life and growth."
        }
        (Attacker, Father) => {
            "As a father, the attacker temperament solves problems at home through action. It stands on the front line, makes the necessary decisions and keeps the family moving toward its goals."
        }
        (Attacker, Adult) => {
            "At work, the attacker temperament embraces new challenges and acts toward its goals unprompted. Faced with a problem it finds the solution itself and delivers results."
        }
        (Gamemaker, Player) => {
            "The gamemaker temperament reads the overall flow and chooses the best action for the moment. It coordinates the movements and roles of the whole team and keeps attack and defence in balance."
        }
        (Gamemaker, Coach) => {
            "As a coach, the gamemaker temperament draws on each player's traits, plans tactics that keep the team in harmony and steers it toward success. It binds people together and keeps the whole working efficiently."
        }
        (Gamemaker, Mother) => {
            "As a mother, the gamemaker temperament watches calmly over the household and keeps the family functioning. It grasps the child's challenges clearly and offers solutions."
        }
        (Gamemaker, Father) => {
            "As a father, the gamemaker temperament reads situations calmly and keeps the family or team in harmony while moving toward its goals. It takes on the coordinating role that keeps everyone running smoothly."
        }
        (Gamemaker, Adult) => {
            "At work, the gamemaker temperament is the coordinator who sees the whole flow and supports the people around it. It takes the right action at the right time so the team reaches its goals."
        }
        (Defender, Player) => {
            "The defender temperament anticipates problems and deals with them calmly. Just as it stops an opponent's attack, it prepares for difficulties in advance and finds a composed solution when they arrive."
        }
        (Defender, Coach) => {
            "As a coach, the defender temperament plans its coaching to protect the players' development and manages risk thoroughly. It foresees problems and responds calmly."
        }
        (Defender, Mother) => {
            "As a mother, the defender temperament prepares for foreseeable problems and responds calmly. It supports the child through difficulties and shows a steady way forward."
        }
        (Defender, Father) => {
            "As a father, the defender temperament anticipates problems at home and finds solutions. Calm and steady, it acts to keep the whole family stable."
        }
        (Defender, Adult) => {
            "At work, the defender temperament prepares for predictable problems and acts according to plan. It stays calm under pressure and tackles problems as a team."
        }
        (Anchor, Player) => {
            "The anchor temperament reads the game calmly and keeps the team stable while adjusting. It balances attack and defence, stays composed under pressure and supports teammates."
        }
        (Anchor, Coach) => {
            "As a coach, the anchor temperament supports the players and calmly adjusts the game while keeping the team balanced. It reads the flow of play, picks the best tactics and helps players perform at their best."
        }
        (Anchor, Mother) => {
            "As a mother, the anchor temperament keeps a calm view of the household and supports the child's growth. It responds flexibly when problems arise and keeps the home stable."
        }
        (Anchor, Father) => {
            "As a father, the anchor temperament adjusts calmly and provides a stable environment. It keeps track of work and home and acts to keep everything in balance."
        }
        (Anchor, Adult) => {
            "At work, the anchor temperament watches calmly over the situation and keeps the organization stable. When sudden changes come it responds with composure and supports the whole team."
        }
        (_, All) => "",
    }
}
