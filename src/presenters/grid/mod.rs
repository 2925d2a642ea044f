pub mod pixel_buffer_sink;
