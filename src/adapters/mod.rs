pub mod permalink;
