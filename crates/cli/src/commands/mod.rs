pub mod check;
pub mod init;
pub mod watch;

pub use check::check_command;
pub use init::init_command;
pub use watch::watch_command;
