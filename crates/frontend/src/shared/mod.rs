pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod error;
pub mod http;
pub mod icons;
pub mod modal_frame;
pub mod notifier;
pub mod number_format;
pub mod status;
