pub mod model;
pub mod commands;
pub mod calendar;
pub mod view;

pub use model::*;
pub use commands::*;
pub use calendar::*;
pub use view::*;
