pub mod error;
pub mod id;
pub mod json;
pub mod types;

pub use error::CoreError;
pub use id::{AccountId, ChangeNumber, RevisionId};
pub use json::decode_json;
