pub mod backup;
pub mod config;
pub mod counts;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod posts;
pub mod recent;
pub mod register;
pub mod stats;
pub mod top;
pub mod vote;
pub mod widget;
pub mod years;
