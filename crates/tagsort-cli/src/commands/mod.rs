pub mod init;
pub mod list_sets;
pub mod play;
pub mod validate;
