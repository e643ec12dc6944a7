pub mod construct;
pub mod conversion;
pub mod relation;
pub mod spec;

pub use construct::*;
pub use conversion::*;
pub use relation::*;
pub use spec::*;
