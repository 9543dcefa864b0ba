pub mod construction;
pub mod definition;
pub mod summary;

pub use self::construction::{Compiled, LinearBuilder, LinearConstruction};
pub use self::definition::NetworkDefinition;
pub use self::summary::{Summary, SummaryRow};
