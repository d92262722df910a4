pub mod store;
pub mod table;

pub use store::{GymStore, HydrationPolicy, HydrationReport};
pub use table::Table;
