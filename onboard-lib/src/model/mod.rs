//! Registration data model

mod draft;
mod payload;
mod response;

pub use draft::*;
pub use payload::*;
pub use response::*;
