//! Core library for the virtual turntable.
//!
//! The crate models a record player whose visuals must stay in lock-step with
//! audio transport: a tonearm that lifts before the record may move, a record
//! that seats before it may spin, and one-shot sound cues that fire exactly
//! once per physical transition. The [`Turntable`] coordinator owns all of
//! that continuous animation state and drives the presentation layer through
//! the [`Sink`] capability interface; track positions come from a read-only
//! [`TrackCatalog`]. Everything else (file ingestion, rendering, real audio)
//! lives outside this crate.

pub mod animator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod sink;
pub mod target;

pub use animator::{Phase, Turntable};
pub use catalog::{Album, AlbumLibrary, LibraryCatalog, TrackCatalog, TrackEntry};
pub use config::AnimationSettings;
pub use error::{Result, TurntableError};
pub use sink::{NullSink, Sink};
pub use target::PlaybackTarget;
