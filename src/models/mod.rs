pub mod entry;
pub mod entry_id;
pub mod platform;

pub use entry::WorkSessionEntry;
pub use entry_id::EntryId;
pub use platform::{Platform, RideCounts};
