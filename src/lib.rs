#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::random_layout;
pub use ship::*;
pub use ui::render_board;
#[cfg(feature = "std")]
pub use ui::print_board;
