pub mod bbox;
pub mod capture;
pub mod convertors;
pub mod error;
pub mod io;

pub use error::{PolyformError, Result};
