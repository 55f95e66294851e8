//! Static locations and the choice-driven visit state machine.

mod data;
mod visit;

pub use data::{get_all_locations, get_location, select_location, Location};
pub use visit::{LocationChoice, LocationEvent, LocationVisit, VisitState};
