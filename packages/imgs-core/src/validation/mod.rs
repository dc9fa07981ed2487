pub mod name;
pub mod params;

pub use name::{asset_name, validate_ident};
pub use params::validate_size;
