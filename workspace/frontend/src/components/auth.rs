mod forgot_password;
mod login;
mod signup;

pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use signup::Signup;
