pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use tabmap_core::stmt::{self, Statement};
