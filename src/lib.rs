pub mod cli;
pub mod listing;
pub mod s3;
