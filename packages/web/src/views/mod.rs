mod auth_layout;
pub use auth_layout::AuthLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod dashboard;
pub use dashboard::{Dashboard, DashboardLayout, DragDrop, InfiniteScroll};

mod not_found;
pub use not_found::NotFound;
