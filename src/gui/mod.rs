//! GUI module - Native chart windows

mod app;

pub use app::NativeDisplay;
