mod types;

pub use types::{AppEvent, Entry};
