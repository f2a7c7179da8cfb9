// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timesheet project*
//!
//! This crate defines the basic datatypes used across the Timesheet project
//! (layout engine, CLI frontend): textual date expressions, raw widget rows
//! and normalised events.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date;
mod event;
mod input;
mod label;

pub use date::*;
pub use event::*;
pub use input::*;
pub use label::*;
