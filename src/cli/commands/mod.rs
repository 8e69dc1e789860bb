pub mod config;
pub mod convert;
pub mod file;
pub mod init;
pub mod inspect;
