// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timesheet project*
//!
//! The Timesheet layout engine.  This turns a list of raw widget rows into
//! everything a renderer needs to draw a horizontal timeline: the inferred
//! year span, the scale granularity (months vs years), the compacted scale
//! strip for the boundary years, and a proportional offset and width per
//! event.
//!
//! The engine works in fractional slot units and multiplies by the
//! renderer-supplied reference slot length only at the boundary.  It never
//! queries any layout state itself - the renderer hands it a single scalar
//! (the measured length of one scale section) and consumes plain data in
//! return.
//!

mod model;
mod scale;
mod section;
mod segment;
mod span;

pub use model::*;
pub use scale::*;
pub use section::*;
pub use segment::*;
pub use span::*;
