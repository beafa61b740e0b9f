/// Client-facing payloads
///
/// Pure projections from loaded records into the JSON shapes the web client
/// consumes. None of the builders perform I/O of their own.
pub mod response;
pub mod storage;
pub mod tag;
pub mod user;

pub use response::{check_login, Response};
pub use storage::{build_user_storage, build_user_storage_response, StorageView};
pub use tag::{build_tag_res, TagView};
pub use user::{build_user, build_user_response, load_user_view, GroupView, PolicyView, UserView};
