mod account;
mod change;
mod config;
mod label;
mod revision;
mod weblink;

pub use account::Account;
pub use change::{ActionInfo, Change, ChangeStatus, SubmitRequirement, SubmitType};
pub use config::{ChangeConfigInfo, GerritInfo, ReceiveInfo, ServerConfig};
pub use label::{ApprovalInfo, Label};
pub use revision::{CommitInfo, GpgKeyInfo, KeyStatus, ParentCommit, PushCertificate, Revision};
pub use weblink::{WebLink, GITILES_WEBLINK};
