pub mod build;
pub mod deploy;
pub mod push;
pub mod versions;
