// selection/mod.rs
//
// Which body is focused, how clicks/keys/tour steps change it, and the
// navigation capability handed to the page.

pub mod machine;
pub mod nav;
pub mod tour;

pub use machine::{ControlMode, SelectOutcome, SelectionMachine};
pub use nav::{NavCommand, NavigationHandle};
pub use tour::AutoTour;
