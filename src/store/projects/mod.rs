//! Projects store: the full list, the detail record, dashboard tallies and
//! the sampled/filtered views derived from every full fetch.

pub mod derive;
mod intent;
mod reducer;
mod state;

pub use derive::{DerivedViews, StatusCounts};
pub use intent::ProjectsIntent;
pub use reducer::ProjectsReducer;
pub use state::ProjectsState;
