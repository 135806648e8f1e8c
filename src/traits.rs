mod seq_tools;

pub use seq_tools::*;
