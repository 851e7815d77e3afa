mod board;
pub use board::BoardView;

mod dashboard_shell;
pub use dashboard_shell::DashboardShell;

mod feed;
pub use feed::FeedView;

mod profile;
pub use profile::ProfileView;

mod screens;
pub use screens::{CrashScreen, LoadingScreen, NotFoundView};
