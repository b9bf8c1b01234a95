pub mod config;
pub mod counter;
pub mod data_storage;
pub mod draft;
pub mod error;
pub mod export;
pub mod messages;
pub mod session;
pub mod shift;
pub mod shift_window;
pub mod time_math;
pub mod view;
