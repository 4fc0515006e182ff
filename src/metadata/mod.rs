pub mod author;
pub mod path_hash;
pub mod record;
pub mod xml;

pub use author::*;
pub use path_hash::*;
pub use record::*;
pub use xml::*;
