// libs/doctor-cell/src/services/recommendation.rs
use std::cmp::Ordering;

use tracing::debug;

use crate::models::{normalize, DoctorRecord, RecommendationError, ScoredDoctor};
use crate::services::catalog::DoctorCatalog;

/// Disease-to-specialization resolution and score-ranked doctor lookup.
pub struct RecommendationService<'a> {
    catalog: &'a DoctorCatalog,
}

impl<'a> RecommendationService<'a> {
    pub fn new(catalog: &'a DoctorCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the specialization for a disease.
    ///
    /// Comparison is trim + lowercase equality; with duplicate disease rows the
    /// first row in table order wins.
    pub fn resolve_specialization(
        &self,
        disease: &str,
    ) -> Result<&'a str, RecommendationError> {
        let needle = normalize(disease);
        self.catalog
            .diseases()
            .iter()
            .find(|entry| normalize(&entry.disease) == needle)
            .map(|entry| entry.specialization.as_str())
            .ok_or(RecommendationError::UnknownDisease)
    }

    /// Doctors in a city with a given specialization, ranked by weighted score.
    pub fn find_doctors(
        &self,
        city: &str,
        specialization: &str,
    ) -> Result<Vec<ScoredDoctor>, RecommendationError> {
        let city_key = normalize(city);
        let specialization_key = normalize(specialization);

        let mut matched: Vec<&DoctorRecord> = self
            .catalog
            .doctors()
            .iter()
            .filter(|doctor| {
                normalize(&doctor.city) == city_key
                    && normalize(&doctor.specialization) == specialization_key
            })
            .collect();

        if matched.is_empty() {
            return Err(RecommendationError::NoDoctorsMatched {
                city: city.to_string(),
                specialization: specialization.to_string(),
            });
        }

        // Stable sort: specialization ascending, then score descending. Equal
        // scores keep directory order.
        matched.sort_by(|a, b| {
            a.specialization
                .cmp(&b.specialization)
                .then_with(|| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal))
        });

        Ok(matched.into_iter().map(DoctorRecord::scored).collect())
    }

    /// Full finder pipeline: resolve the specialization, then filter and rank.
    pub fn recommend(
        &self,
        disease: &str,
        city: &str,
    ) -> Result<Vec<ScoredDoctor>, RecommendationError> {
        let specialization = self.resolve_specialization(disease)?;
        debug!(
            "Resolved disease '{}' to specialization '{}'",
            disease.trim(),
            specialization
        );
        self.find_doctors(city, specialization)
    }
}
