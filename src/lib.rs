#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod adapter;
mod common;
mod config;
mod game;
mod grid;
mod notice;
mod tile;
mod view;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use adapter::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use notice::*;
pub use tile::*;
pub use view::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
