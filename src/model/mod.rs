mod commit;
mod refs;
mod rename;

pub use commit::{CommitRecord, FileChange, FileMode};
pub use refs::RefSet;
pub use rename::{RenameChain, RenameEvent, RenameInterval};
