pub mod config;
pub mod posts;
pub mod render;
pub mod report;
pub mod storage;
pub mod util;
