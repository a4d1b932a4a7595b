pub mod config;
pub mod init;
pub mod matchups;
pub mod rounds;
pub mod weeks;
