// SPDX-License-Identifier: MIT

//!
//! The timeline model: ingestion, span inference and renderer-facing outputs
//!

use crate::{Granularity, Scale, SectionOut, Segment, SegmentOut, Span, SpanError};
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;
use timesheet_core::{Event, EventError, EventInput, Year};

/// Errors that can arise when building a [`Timesheet`]
#[derive(Error, Debug)]
pub enum ModelError {
    /// One of the raw rows couldn't be turned into an event
    #[error("Row {index}: {source}")]
    Row { index: usize, source: EventError },

    /// The span hint was invalid
    #[error(transparent)]
    Span(#[from] SpanError),
}

/// The visible month range of one year of the scale strip, 1-based and
/// inclusive.  Boundary years may be compacted to only the months their data
/// actually covers; `first > last` iterates as empty (an eventless
/// single-year span compacts to December..January)
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthRange {
    pub first: u8,
    pub last: u8,
}

impl MonthRange {
    /// Iterate the visible months, 1-based
    pub fn months(self) -> std::ops::RangeInclusive<u8> {
        self.first..=self.last
    }
}

/// The 1-based first visible month of a boundary year: the earliest month
/// among events starting in that year.  Month-less starts count as January.
/// With no event starting there the result collapses to December (no
/// evidence, so no restriction from the left)
pub fn first_visible_month(events: &[Event], boundary_year: Year) -> u8 {
    let index = events
        .iter()
        .filter(|event| event.start_year() == boundary_year)
        .map(|event| event.start_month().map(|m| m.index()).unwrap_or(0))
        .min()
        .unwrap_or(11);
    1 + index
}

/// The 1-based last visible month of a boundary year: the latest month among
/// each event's end - or start, when it has no end - falling in that year.
/// Month-less endpoints count as January.  With no matching endpoint the
/// result collapses to January
pub fn last_visible_month(events: &[Event], boundary_year: Year) -> u8 {
    let index = events
        .iter()
        .filter_map(|event| {
            let endpoint = event.end().unwrap_or(event.start());
            (endpoint.year() == boundary_year)
                .then(|| endpoint.month().map(|m| m.index()).unwrap_or(0))
        })
        .max()
        .unwrap_or(0);
    1 + index
}

/// The core timesheet model.  Owns the normalised events, the inferred year
/// span and the granularity derived from it, and produces everything a
/// renderer needs.
///
/// Built once from an immutable input set and never mutated afterwards; every
/// per-render computation is a pure function of the model plus the
/// renderer-supplied section length
#[derive(Debug)]
pub struct Timesheet {
    /// The normalised events, in input order (data order is what the widget
    /// displays)
    events: Vec<Event>,

    /// The year span: the hint widened by every event's years
    span: Span,

    /// The scale granularity, derived from the widened span
    granularity: Granularity,
}

impl Timesheet {
    /// Build a model from raw widget rows and a span hint.  Each row is
    /// resolved and validated exactly once; a bad row fails the whole build,
    /// carrying the row's index
    pub fn build(rows: Vec<EventInput>, hint: Span) -> Result<Timesheet, ModelError> {
        let mut events = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let event = Event::try_from(row).map_err(|source| ModelError::Row { index, source })?;
            events.push(event);
        }
        Ok(Self::from_events(events, hint))
    }

    /// Build a model from already-validated events and a span hint
    pub fn from_events(events: Vec<Event>, hint: Span) -> Timesheet {
        let mut span = hint;
        for event in &events {
            span = span.widen(event.start_year(), event.end_year());
        }
        let granularity = span.granularity();

        debug!(
            "built timesheet: {} events, span {}..{}, granularity {:?}",
            events.len(),
            span.min_year(),
            span.max_year(),
            granularity
        );

        Timesheet {
            events,
            span,
            granularity,
        }
    }

    /// Get the model's events, in input order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get the model's span
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the model's granularity
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Whether the scale subdivides by month
    pub fn use_months(&self) -> bool {
        self.granularity == Granularity::Months
    }

    /// The visible month range of one year of the strip.  Interior years
    /// always show all twelve months; the boundary years are compacted to
    /// the months their data covers
    pub fn visible_months(&self, year: Year) -> MonthRange {
        let first = if year == self.span.min_year() {
            first_visible_month(&self.events, year)
        } else {
            1
        };
        let last = if year == self.span.max_year() {
            last_visible_month(&self.events, year)
        } else {
            12
        };
        MonthRange { first, last }
    }

    /// The scale for a given reference section length
    pub fn scale(&self, section_len: f64) -> Scale {
        let first_month = match self.granularity {
            Granularity::Months => first_visible_month(&self.events, self.span.min_year()),
            Granularity::Years => 1,
        };
        Scale::new(self.granularity, self.span.min_year(), first_month, section_len)
    }

    /// Get all information needed to draw the scale strip: one section per
    /// visible month under month granularity, one per year otherwise
    pub fn sections_for_drawing(&self) -> Vec<SectionOut> {
        let mut sections = Vec::new();
        match self.granularity {
            Granularity::Months => {
                for year in self.span.years() {
                    for month in self.visible_months(year).months() {
                        sections.push(SectionOut::for_month(year, month));
                    }
                }
            }
            Granularity::Years => {
                for year in self.span.years() {
                    sections.push(SectionOut::for_year(year));
                }
            }
        }
        sections
    }

    /// Get all information needed to draw the events, in input order, for a
    /// given reference section length
    pub fn segments_for_drawing(&self, section_len: f64) -> Vec<SegmentOut> {
        let scale = self.scale(section_len);
        self.events
            .iter()
            .map(|event| {
                let segment = Segment::new(scale, event);
                let out = SegmentOut {
                    event: event.clone(),
                    offset: segment.start_offset(),
                    width: segment.width(),
                    date_label: segment.date_label(),
                    tooltip: event.label().plain_text(),
                };
                trace!(
                    "segment {}: offset {}, width {}",
                    out.date_label, out.offset, out.width
                );
                out
            })
            .collect()
    }
}
