pub mod check;
pub mod cite;
pub mod repo_id;
pub mod resolve;

pub use check::run_check;
pub use cite::run_cite;
pub use repo_id::run_uuid;
pub use resolve::run_resolve;
