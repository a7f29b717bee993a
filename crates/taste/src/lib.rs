pub mod dietary;
pub mod error;
pub mod profile;
pub mod store;
pub mod summary;

pub use dietary::infer_dietary_patterns;
pub use error::TasteError;
pub use profile::{ComplexityPreference, CookingFrequency, TasteProfile};
pub use store::{MemoryProfileStore, PROFILE_STORAGE_KEY, ProfileStore};
pub use summary::NEW_USER_SUMMARY;
