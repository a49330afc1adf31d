mod component;
mod document;
mod profile;
mod search;

pub use component::*;
pub use document::*;
pub use profile::*;
pub use search::*;
