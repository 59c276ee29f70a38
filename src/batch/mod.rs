//! Address refresh over stored user locations.
//!
//! Recomputes the free-text address of every user with coordinates and
//! reports what changed. Persisting the result is the caller's job.

mod csv_io;
mod record;
mod refresh;

pub use csv_io::{read_csv, write_csv, BatchError};
pub use record::{RefreshMode, UserLocation};
pub use refresh::{refresh, AddressChange, RefreshReport};
