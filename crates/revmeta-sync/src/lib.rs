pub mod assignee;
pub mod error;
pub mod http_client;
pub mod remote;
pub mod session;

pub use assignee::{AssigneeCall, AssigneeOp, AssigneeSync, SyncState};
pub use error::SyncError;
pub use http_client::{Credentials, HttpChangeRemote};
pub use remote::{ChangeRemote, HashtagsInput};
pub use session::{MetadataEvent, MetadataSession};
