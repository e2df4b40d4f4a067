mod dashboard;
mod login;
mod settings;

pub use dashboard::DashboardPage;
pub use login::LogInPage;
pub use settings::SettingsPage;
