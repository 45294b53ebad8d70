pub mod conversion;
pub mod definition;
pub mod edge;
pub mod node;
pub mod tags;

pub use conversion::*;
pub use definition::*;
pub use edge::*;
pub use node::*;
pub use tags::*;
