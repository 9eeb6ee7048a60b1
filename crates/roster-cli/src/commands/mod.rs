pub mod init;
pub mod range;
pub mod render;
pub mod shell;
pub mod stats;
