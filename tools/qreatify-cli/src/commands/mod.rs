pub mod config;
pub mod generate;
pub mod preview;
pub mod theme;
