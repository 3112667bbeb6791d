#![allow(dead_code, unused_imports)]
pub mod in_memory;
pub mod test_db;

pub use in_memory::*;
pub use test_db::*;
