//! Filtering, sorting and paging a user's result history.

use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};

use sportsmind_core::models::athlete_type::AthleteType;
use sportsmind_core::models::test_result::{TestHistory, TestResult};

use crate::error::ScoringError;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    All,
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl Period {
    pub fn days(self) -> Option<i64> {
        match self {
            Period::All => None,
            Period::OneMonth => Some(30),
            Period::ThreeMonths => Some(90),
            Period::SixMonths => Some(180),
        }
    }

    /// Oldest timestamp still inside the period.
    pub fn cutoff(self, now: Timestamp) -> Option<Timestamp> {
        let days = self.days()?;
        Some(
            now.checked_sub(SignedDuration::from_hours(days * 24))
                .unwrap_or(Timestamp::MIN),
        )
    }
}

impl FromStr for Period {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Period::All),
            "1month" => Ok(Period::OneMonth),
            "3months" => Ok(Period::ThreeMonths),
            "6months" => Ok(Period::SixMonths),
            other => Err(ScoringError::InvalidParameter {
                field: "period",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Newest first.
    #[default]
    Date,
    /// Highest overall score first.
    Score,
}

impl FromStr for SortBy {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortBy::Date),
            "score" => Ok(SortBy::Score),
            other => Err(ScoringError::InvalidParameter {
                field: "sort_by",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub period: Period,
    /// Empty means no filter.
    pub athlete_types: Vec<AthleteType>,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    pub sort_by: SortBy,
    pub offset: usize,
    pub limit: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            period: Period::All,
            athlete_types: Vec::new(),
            score_min: None,
            score_max: None,
            sort_by: SortBy::Date,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parse a comma-separated athlete type list, skipping blank entries.
pub fn parse_athlete_types(raw: &str) -> Result<Vec<AthleteType>, ScoringError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ScoringError::InvalidParameter {
                field: "athlete_types",
                value: s.to_string(),
            })
        })
        .collect()
}

impl HistoryQuery {
    fn matches(&self, result: &TestResult, cutoff: Option<Timestamp>) -> bool {
        if cutoff.is_some_and(|c| result.taken_at < c) {
            return false;
        }
        if !self.athlete_types.is_empty()
            && !result
                .athlete_type()
                .is_some_and(|t| self.athlete_types.contains(&t))
        {
            return false;
        }
        let overall = result.overall_score();
        if self.score_min.is_some_and(|min| overall < min) {
            return false;
        }
        if self.score_max.is_some_and(|max| overall > max) {
            return false;
        }
        true
    }

    /// Filter, sort and page `results`. `total_count` is taken after
    /// filtering and before paging.
    pub fn apply(&self, results: Vec<TestResult>, now: Timestamp) -> TestHistory {
        let cutoff = self.period.cutoff(now);
        let mut matching: Vec<TestResult> = results
            .into_iter()
            .filter(|r| self.matches(r, cutoff))
            .collect();

        match self.sort_by {
            SortBy::Date => matching.sort_by(|a, b| b.taken_at.cmp(&a.taken_at)),
            SortBy::Score => {
                matching.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()))
            }
        }

        let total_count = matching.len();
        let results = matching
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect();
        TestHistory {
            results,
            total_count,
        }
    }
}

/// The newest result, if any.
pub fn latest(results: &[TestResult]) -> Option<&TestResult> {
    results.iter().max_by_key(|r| r.taken_at)
}
