pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{HistoryError, LocationDirectory, SnapshotHistoryReader};
