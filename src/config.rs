use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical offset past which the top navigation gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const SUPPORT_EMAIL: &str = "official.fundr@gmail.com";
pub const MAIL_SUBJECT: &str = "Premium Access Request - Fundr";
pub const CONTACT_PHONE: &str = "+91 6386054558";
pub const OFFICE_ADDRESS: [&str; 3] = [
    "DLF Cyber Park",
    "Phase II, Udyog Vihar, Sector 20,",
    "Gurugram, Haryana 122022",
];

pub const PLAY_STORE_URL: &str = "https://play.google.com/store";
pub const APP_STORE_URL: &str = "https://apps.apple.com/";
