//! Windowed host: winit for the window and input, pixels for the framebuffer.

mod app;
pub mod commands;
