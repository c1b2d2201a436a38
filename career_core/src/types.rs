use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of skill attributes the classifier was trained on.
pub const SKILL_COUNT: usize = 17;

/// Skill attributes in classifier feature order.
pub const SKILL_COLUMNS: [&str; SKILL_COUNT] = [
    "Database Fundamentals",
    "Computer Architecture",
    "Distributed Computing Systems",
    "Cyber Security",
    "Networking",
    "Software Development",
    "Programming Skills",
    "Project Management",
    "Computer Forensics Fundamentals",
    "Technical Communication",
    "AI ML",
    "Software Engineering",
    "Business Analysis",
    "Communication skills",
    "Data Science",
    "Troubleshooting skills",
    "Graphics Designing",
];

/// The closed set of roles the classifier can recommend.
pub const CAREER_LABELS: [&str; 17] = [
    "Database Administrator",
    "Hardware Engineer",
    "Application Support Engineer",
    "Cyber Security Specialist",
    "Networking Engineer",
    "Software Developer",
    "API Specialist",
    "Project Manager",
    "Information Security Specialist",
    "Technical Writer",
    "AI ML Specialist",
    "Software Tester",
    "Business Analyst",
    "Customer Service Executive",
    "Data Scientist",
    "Helpdesk Engineer",
    "Graphics Designer",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating value {0} is outside the 0-6 scale")]
    OutOfRange(i64),

    #[error("Unknown rating '{0}'")]
    Unknown(String),
}

/// Ordinal self-assessment of proficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SkillRating {
    NotInterested,
    Poor,
    #[default]
    Beginner,
    Average,
    Intermediate,
    Excellent,
    Professional,
}

impl SkillRating {
    pub const ALL: [SkillRating; 7] = [
        SkillRating::NotInterested,
        SkillRating::Poor,
        SkillRating::Beginner,
        SkillRating::Average,
        SkillRating::Intermediate,
        SkillRating::Excellent,
        SkillRating::Professional,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: i64) -> Result<Self, RatingError> {
        usize::try_from(value)
            .ok()
            .and_then(|v| Self::ALL.get(v).copied())
            .ok_or(RatingError::OutOfRange(value))
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillRating::NotInterested => "Not Interested",
            SkillRating::Poor => "Poor",
            SkillRating::Beginner => "Beginner",
            SkillRating::Average => "Average",
            SkillRating::Intermediate => "Intermediate",
            SkillRating::Excellent => "Excellent",
            SkillRating::Professional => "Professional",
        }
    }

    /// Beginner or above counts towards readiness
    pub fn is_ready(self) -> bool {
        self >= SkillRating::Beginner
    }

    /// One step up, saturating at Professional
    pub fn next(self) -> Self {
        Self::ALL
            .get(self as usize + 1)
            .copied()
            .unwrap_or(SkillRating::Professional)
    }

    /// One step down, saturating at Not Interested
    pub fn prev(self) -> Self {
        (self as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(SkillRating::NotInterested)
    }
}

impl fmt::Display for SkillRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillRating {
    type Err = RatingError;

    /// Accepts either the integer value or the display name (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::from_value(value);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RatingError::Unknown(trimmed.to_string()))
    }
}

impl TryFrom<u8> for SkillRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(i64::from(value))
    }
}

impl From<SkillRating> for u8 {
    fn from(rating: SkillRating) -> Self {
        rating.value()
    }
}

/// Ordered ratings, one per skill attribute.
///
/// Any length is accepted here; the resolver rejects vectors whose length
/// disagrees with the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillVector(Vec<SkillRating>);

impl SkillVector {
    pub fn new(ratings: Vec<SkillRating>) -> Self {
        Self(ratings)
    }

    /// Every attribute at the same rating
    pub fn uniform(rating: SkillRating) -> Self {
        Self(vec![rating; SKILL_COUNT])
    }

    pub fn from_values(values: &[i64]) -> Result<Self, RatingError> {
        values
            .iter()
            .map(|&v| SkillRating::from_value(v))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parses a comma-separated list of ratings, e.g. `"5,5,Beginner,..."`.
    pub fn parse_list(input: &str) -> Result<Self, RatingError> {
        input
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(SkillRating::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ratings(&self) -> &[SkillRating] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<SkillRating> {
        self.0.get(index).copied()
    }

    pub fn set(&mut self, index: usize, rating: SkillRating) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = rating;
        }
    }

    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|r| r.value()).collect()
    }

    /// Feature row in the layout the classifier consumes
    pub fn as_features(&self) -> Vec<f32> {
        self.0.iter().map(|r| f32::from(r.value())).collect()
    }
}

impl Default for SkillVector {
    fn default() -> Self {
        Self::uniform(SkillRating::default())
    }
}

/// Career role predicted by the classifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareerLabel(String);

impl CareerLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label belongs to the fixed role set
    pub fn is_known(&self) -> bool {
        CAREER_LABELS.contains(&self.0.as_str())
    }
}

impl fmt::Display for CareerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CareerLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
