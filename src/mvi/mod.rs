//! Unidirectional data-flow primitives shared by every store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: plain value snapshot of one store (or the whole tree)
//! - **Intent**: a lifecycle outcome or a synchronous UI setter
//! - **Reducer**: the only place where state transitions happen

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
