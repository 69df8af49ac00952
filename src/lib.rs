pub mod repl;
pub mod storage;
pub mod types;
pub mod utils;
