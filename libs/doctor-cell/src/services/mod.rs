pub mod catalog;
pub mod recommendation;

pub use catalog::DoctorCatalog;
pub use recommendation::RecommendationService;
