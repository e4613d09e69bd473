pub mod model;
pub mod commands;
pub mod view;

pub use model::*;
pub use commands::*;
pub use view::*;
