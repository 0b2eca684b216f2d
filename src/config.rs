//! Configuration for ffm, read from `ffm.toml`.
//!
//! - [general]: initial sort mode and logging.
//! - [display]: header, borders and cursor drawing.
//! - [theme]: colours.
//! - [input]: key bindings.
//! - [load]: locating and parsing the file into [Config].

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::General;
pub use input::Keys;
pub use load::Config;
pub use theme::Theme;
