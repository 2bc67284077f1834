//! dragscroll
//!
//! Press-drag-release scrolling: a pointer displacement is mapped through a
//! velocity curve and applied to a viewport in whole lines or sub-line
//! pixels, continuously on timer ticks, with optional clamping at the end of
//! the content and exact restore on cancel.
//!
//! The crate is split into a pure core and an impure shell:
//! - [`scroll`] and [`gesture`] implement the engine against the
//!   [`scroll::Viewport`] and [`gesture::DragHost`] traits.
//! - [`config`], [`logging`], [`model`], [`source`] and [`view`] make up the
//!   terminal document viewer that drives the engine from real mouse input.

pub mod config;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod scroll;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
