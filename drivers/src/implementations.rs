pub mod tick_clock;
