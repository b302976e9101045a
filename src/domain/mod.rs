mod page_id;
mod request_path;

pub use page_id::PageId;
pub use request_path::{RequestPath, RequestPathError};
