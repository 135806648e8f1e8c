mod accumulate;
mod batched;
mod pairwise;
mod step_range;

pub use accumulate::*;
pub use batched::*;
pub use pairwise::*;
pub use step_range::*;
