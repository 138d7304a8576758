pub mod commands;
pub mod error;
pub mod fs_utils;
pub mod init;
pub mod logging;
pub mod paths;
pub mod profiles;
pub mod switch;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
