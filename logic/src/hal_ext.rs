pub mod millis;
pub mod output_line;
