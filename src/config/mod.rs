pub mod currency_profile;
pub mod settings;
