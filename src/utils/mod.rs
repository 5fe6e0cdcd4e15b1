pub mod date;
pub mod id;
pub mod name;
pub mod path;

pub use date::{MISSING_DATE, to_serial_date};
pub use id::normalize_id;
pub use name::split_name;
