// libs/doctor-cell/src/services/catalog.rs
use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::info;

use shared_config::AppConfig;

use crate::models::{normalize, DiseaseEntry, DoctorRecord};

/// In-memory copy of the two reference tables.
///
/// Loaded once at startup and shared read-only for the process lifetime; request
/// handling never mutates it.
#[derive(Debug, Clone)]
pub struct DoctorCatalog {
    doctors: Vec<DoctorRecord>,
    diseases: Vec<DiseaseEntry>,
}

impl DoctorCatalog {
    pub fn load(config: &AppConfig) -> Result<Self> {
        Self::from_paths(&config.doctor_data_path, &config.disease_data_path)
    }

    pub fn from_paths(
        doctor_path: impl AsRef<Path>,
        disease_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let doctors = load_doctors(doctor_path.as_ref())?;
        let diseases = load_diseases(disease_path.as_ref())?;

        info!(
            "Loaded {} doctors and {} disease mappings",
            doctors.len(),
            diseases.len()
        );

        Ok(Self { doctors, diseases })
    }

    /// Full directory in original table order.
    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    pub fn diseases(&self) -> &[DiseaseEntry] {
        &self.diseases
    }

    /// Directory rows whose city matches, in original table order.
    pub fn doctors_in_city(&self, city: &str) -> Vec<&DoctorRecord> {
        let needle = normalize(city);
        self.doctors
            .iter()
            .filter(|doctor| normalize(&doctor.city) == needle)
            .collect()
    }

    /// Distinct specializations as stored, first-occurrence order.
    pub fn specializations(&self) -> Vec<String> {
        distinct(self.doctors.iter().map(|d| d.specialization.as_str()))
    }

    /// Distinct cities as stored, first-occurrence order.
    pub fn cities(&self) -> Vec<String> {
        distinct(self.doctors.iter().map(|d| d.city.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

fn load_doctors(path: &Path) -> Result<Vec<DoctorRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open doctor directory {}", path.display()))?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let city_idx = column_index(&headers, "city", path)?;
    let specialization_idx = column_index(&headers, "specialization", path)?;
    let rating_idx = column_index(&headers, "rating", path)?;
    let experience_idx = column_index(&headers, "experience", path)?;

    let mut doctors = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("failed to read row {} of {}", row + 1, path.display()))?;

        let mut fields = Map::new();
        for (header, raw) in headers.iter().zip(record.iter()) {
            fields.insert(header.clone(), infer_value(raw));
        }

        doctors.push(DoctorRecord {
            city: record.get(city_idx).unwrap_or_default().to_string(),
            specialization: record
                .get(specialization_idx)
                .unwrap_or_default()
                .to_string(),
            rating: parse_numeric(&record, rating_idx, "rating", row, path)?,
            experience: parse_numeric(&record, experience_idx, "experience", row, path)?,
            fields,
        });
    }

    Ok(doctors)
}

fn load_diseases(path: &Path) -> Result<Vec<DiseaseEntry>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open disease table {}", path.display()))?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let disease_idx = column_index(&headers, "Disease", path)?;
    let specialization_idx = column_index(&headers, "Specialization", path)?;

    let mut diseases = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("failed to read row {} of {}", row + 1, path.display()))?;

        diseases.push(DiseaseEntry {
            disease: record.get(disease_idx).unwrap_or_default().to_string(),
            specialization: record
                .get(specialization_idx)
                .unwrap_or_default()
                .to_string(),
        });
    }

    Ok(diseases)
}

fn column_index(headers: &[String], name: &str, path: &Path) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!("{} is missing required column '{}'", path.display(), name),
    }
}

fn parse_numeric(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
    path: &Path,
) -> Result<f64> {
    let raw = record.get(idx).unwrap_or_default().trim();
    raw.parse::<f64>().with_context(|| {
        format!(
            "invalid {} '{}' at row {} of {}",
            column,
            raw,
            row + 1,
            path.display()
        )
    })
}

/// Map a CSV cell to a JSON value: integers and finite numerics stay numeric, empty
/// cells become null, everything else is passed through as a string.
fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}
