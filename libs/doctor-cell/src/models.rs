use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalize a value for comparison: surrounding whitespace trimmed, lowercased.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// One row of the disease reference table.
#[derive(Debug, Clone)]
pub struct DiseaseEntry {
    pub disease: String,
    pub specialization: String,
}

/// One row of the doctor directory.
///
/// The four columns the matching logic reads are extracted up front; the full row is
/// kept as an ordered field map so any extra directory columns pass through to
/// responses untouched.
#[derive(Debug, Clone)]
pub struct DoctorRecord {
    pub city: String,
    pub specialization: String,
    pub rating: f64,
    pub experience: f64,
    pub fields: Map<String, Value>,
}

impl DoctorRecord {
    /// Composite ranking value, weighted 70% rating / 30% experience.
    pub fn score(&self) -> f64 {
        self.rating * 0.7 + self.experience * 0.3
    }

    pub fn scored(&self) -> ScoredDoctor {
        ScoredDoctor {
            fields: self.fields.clone(),
            score: self.score(),
        }
    }
}

/// A directory record with its request-scoped ranking score attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDoctor {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub score: f64,
}

/// Body of a finder request. Unknown keys are ignored, so clients that also send a
/// preselected specialization keep working.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorFinderRequest {
    pub disease: Option<String>,
    pub city: Option<String>,
}

// Error types specific to doctor lookups
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationError {
    UnknownDisease,
    NoDoctorsMatched { city: String, specialization: String },
}

impl std::fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationError::UnknownDisease => {
                write!(f, "No specialization found for disease")
            }
            RecommendationError::NoDoctorsMatched {
                city,
                specialization,
            } => {
                write!(
                    f,
                    "No doctor found in {} for {} specialization",
                    city, specialization
                )
            }
        }
    }
}

impl std::error::Error for RecommendationError {}
