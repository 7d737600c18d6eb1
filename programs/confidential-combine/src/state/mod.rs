pub mod combine_state;
pub mod handle_registry;
pub mod tracked_request;

pub use combine_state::*;
pub use handle_registry::*;
pub use tracked_request::*;
