//! Interactive terminal front end.
//!
//! A thin layer over the service: [`Console`] does line I/O, [`input`]
//! collects and edits validated fields, and [`App`] runs the menu.

pub mod app;
pub mod input;
pub mod prompt;

pub use app::App;
pub use prompt::Console;
