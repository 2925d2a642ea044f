pub mod gui_app;
