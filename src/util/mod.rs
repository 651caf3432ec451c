mod path;

pub use path::{collapse_slashes, join_repo_path};
