pub mod error;
pub mod feature_flags;
pub mod prediction;
pub mod wine;

pub use error::*;
pub use feature_flags::*;
pub use prediction::*;
pub use wine::*;
