pub mod draft;
pub mod model;
pub mod store;
pub mod username;

pub use draft::DraftForm;
pub use model::{Preference, Profile};
pub use store::ProfileStore;
