pub mod draw;
pub mod question;
pub mod wheel;
