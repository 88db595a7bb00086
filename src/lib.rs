pub mod config;
pub mod observable;
pub mod shapes;
pub mod state;

pub use observable::{Holder, Subscription, Watch};
pub use shapes::{ShapeCatalog, ShapeVariant, catalog};
pub use state::{GameState, Level, StateError, StateSnapshot, Theme};

#[cfg(test)]
mod tests;
