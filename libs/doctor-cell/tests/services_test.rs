// libs/doctor-cell/tests/services_test.rs

use std::io::Write;

use assert_matches::assert_matches;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use doctor_cell::models::RecommendationError;
use doctor_cell::services::catalog::DoctorCatalog;
use doctor_cell::services::recommendation::RecommendationService;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn catalog_from(doctor_csv: &str, disease_csv: &str) -> DoctorCatalog {
    let doctors = write_csv(doctor_csv);
    let diseases = write_csv(disease_csv);
    DoctorCatalog::from_paths(doctors.path(), diseases.path()).unwrap()
}

const DISEASES: &str = "\
Disease,Specialization
Flu,General Physician
Migraine,Neurologist
";

#[test]
fn test_catalog_passes_through_extra_columns() {
    let catalog = catalog_from(
        "city,specialization,rating,experience,languages,notes\n\
         Mumbai,General Physician,4.5,10,\"Hindi, English\",\n",
        DISEASES,
    );

    let doctor = &catalog.doctors()[0];
    assert_eq!(doctor.fields["languages"], "Hindi, English");
    // Empty cells become null
    assert_eq!(doctor.fields["notes"], Value::Null);
    // Column order is preserved in the field map
    let keys: Vec<&str> = doctor.fields.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        ["city", "specialization", "rating", "experience", "languages", "notes"]
    );
}

#[test]
fn test_catalog_infers_numeric_cells() {
    let catalog = catalog_from(
        "id,city,specialization,rating,experience\n\
         7,Mumbai,General Physician,4.5,10\n",
        DISEASES,
    );

    let doctor = &catalog.doctors()[0];
    assert_eq!(doctor.fields["id"], json!(7));
    assert_eq!(doctor.fields["experience"], json!(10));
    assert_eq!(doctor.fields["rating"], json!(4.5));
    assert_eq!(doctor.rating, 4.5);
    assert_eq!(doctor.experience, 10.0);
}

#[test]
fn test_catalog_rejects_missing_required_column() {
    let doctors = write_csv("city,specialization,experience\nMumbai,General Physician,10\n");
    let diseases = write_csv(DISEASES);

    let result = DoctorCatalog::from_paths(doctors.path(), diseases.path());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("rating"), "got: {}", err);
}

#[test]
fn test_catalog_rejects_unparseable_rating() {
    let doctors = write_csv(
        "city,specialization,rating,experience\nMumbai,General Physician,excellent,10\n",
    );
    let diseases = write_csv(DISEASES);

    let result = DoctorCatalog::from_paths(doctors.path(), diseases.path());
    assert!(result.is_err());
}

#[test]
fn test_resolver_first_match_wins_on_duplicates() {
    let catalog = catalog_from(
        "city,specialization,rating,experience\nMumbai,General Physician,4.0,10\n",
        "Disease,Specialization\n\
         Flu,General Physician\n\
         Flu,Pulmonologist\n",
    );
    let service = RecommendationService::new(&catalog);

    assert_eq!(service.resolve_specialization("Flu").unwrap(), "General Physician");
}

#[test]
fn test_resolver_normalizes_disease_name() {
    let catalog = catalog_from(
        "city,specialization,rating,experience\nMumbai,General Physician,4.0,10\n",
        DISEASES,
    );
    let service = RecommendationService::new(&catalog);

    assert_eq!(service.resolve_specialization("  flu  ").unwrap(), "General Physician");
    assert_eq!(service.resolve_specialization("MIGRAINE").unwrap(), "Neurologist");
    assert_matches!(
        service.resolve_specialization("Plague"),
        Err(RecommendationError::UnknownDisease)
    );
}

#[test]
fn test_find_doctors_scores_and_sorts_descending() {
    let catalog = catalog_from(
        "name,city,specialization,rating,experience\n\
         A,Mumbai,General Physician,4.0,10\n\
         B,Mumbai,General Physician,5.0,2\n\
         C,Mumbai,General Physician,3.0,20\n",
        DISEASES,
    );
    let service = RecommendationService::new(&catalog);

    let ranked = service.find_doctors("Mumbai", "General Physician").unwrap();
    assert_eq!(ranked.len(), 3);

    // C: 3.0*0.7 + 20*0.3 = 8.1, A: 5.8, B: 4.1
    assert_eq!(ranked[0].fields["name"], "C");
    assert_eq!(ranked[1].fields["name"], "A");
    assert_eq!(ranked[2].fields["name"], "B");
    assert!((ranked[0].score - 8.1).abs() < 1e-9);

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_find_doctors_ties_keep_directory_order() {
    let catalog = catalog_from(
        "name,city,specialization,rating,experience\n\
         First,Mumbai,General Physician,4.0,10\n\
         Second,Mumbai,General Physician,4.0,10\n",
        DISEASES,
    );
    let service = RecommendationService::new(&catalog);

    let ranked = service.find_doctors("Mumbai", "General Physician").unwrap();
    assert_eq!(ranked[0].fields["name"], "First");
    assert_eq!(ranked[1].fields["name"], "Second");
}

#[test]
fn test_find_doctors_filter_is_case_and_whitespace_insensitive() {
    let catalog = catalog_from(
        "name,city,specialization,rating,experience\n\
         A, Mumbai ,GENERAL PHYSICIAN,4.0,10\n",
        DISEASES,
    );
    let service = RecommendationService::new(&catalog);

    let ranked = service.find_doctors("mumbai", "general physician").unwrap();
    assert_eq!(ranked.len(), 1);
}

#[test]
fn test_find_doctors_error_names_city_and_specialization() {
    let catalog = catalog_from(
        "name,city,specialization,rating,experience\n\
         A,Mumbai,General Physician,4.0,10\n",
        DISEASES,
    );
    let service = RecommendationService::new(&catalog);

    let err = service.find_doctors("Delhi", "General Physician").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No doctor found in Delhi for General Physician specialization"
    );
}

#[test]
fn test_accessors_distinct_first_occurrence() {
    let catalog = catalog_from(
        "name,city,specialization,rating,experience\n\
         A,Mumbai,General Physician,4.0,10\n\
         B,Delhi,Cardiologist,4.5,8\n\
         C,Mumbai,Cardiologist,4.2,6\n",
        DISEASES,
    );

    assert_eq!(catalog.cities(), ["Mumbai", "Delhi"]);
    assert_eq!(catalog.specializations(), ["General Physician", "Cardiologist"]);
    assert_eq!(catalog.doctors_in_city(" MUMBAI ").len(), 2);
}
