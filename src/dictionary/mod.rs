pub mod entry;

mod api;
mod select;

pub use api::{client, lookup};
pub use select::best_entry;
