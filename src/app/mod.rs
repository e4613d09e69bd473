pub mod workspace;

pub use workspace::{NavEntry, Workspace};
