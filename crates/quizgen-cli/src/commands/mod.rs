pub mod export;
pub mod init;
pub mod run;
pub mod stats;
pub mod validate;
