/// Account and storage domain records
///
/// Loaded and validated by the data-access layer; the view builders treat
/// them as read-only snapshots.
mod group;
mod pack;
mod policy;
mod tag;
mod user;

pub use group::{Group, GroupOptions};
pub use pack::StoragePack;
pub use policy::{Policy, PolicyOptions, PolicyType};
pub use tag::{Tag, TAG_TYPE_PLAIN};
pub use user::{User, UserOptions};
