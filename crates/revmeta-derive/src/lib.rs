pub mod certificate;
pub mod display;
pub mod mutability;
pub mod parents;
pub mod role;
pub mod summary;
pub mod weblinks;

pub use certificate::{validate_push_certificate, PushCertificateValidation, ValidationClass};
pub use mutability::{is_read_only, MutableField};
pub use parents::{compute_parents, parent_list_class, parents_label, ParentLineage};
pub use role::{non_owner_role, show_role_class, ChangeRole};
pub use summary::{ChangeMetadata, DeriveOptions};
pub use weblinks::{compute_weblinks, filter_weblinks, RawWeblinks, WeblinkSource};
