pub mod source;

pub use source::{Source, new_seed, seed_from_u64};
