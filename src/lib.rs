//! Touch input pipeline for a two-device shared drawing board.
//!
//! A resistive panel is sampled in short bursts, the burst is reduced to one
//! denoised contact, and the contact is routed against the on-screen controls.
//! Touches that land on the canvas are drawn locally, logged into the drawing
//! history and handed to the replication layer so the peer board can replay
//! them.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod dispatch;
pub mod history;
pub mod raster;
pub mod runtime;
pub mod sync;
pub mod touch;
pub mod ui;

pub use dispatch::{CycleOutcome, TouchContext, TouchDispatcher};
pub use touch::types::{FilteredPoint, RawSample, ScreenPoint};
