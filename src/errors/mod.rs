pub mod types;

pub use types::ScoutError;
