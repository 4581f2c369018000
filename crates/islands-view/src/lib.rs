//! Zero-copy strided views over a shared boolean buffer.
//!
//! A [`View`] is a cheap descriptor over a reference-counted [`Buffer`]:
//! an offset plus one [`Axis`] (`len`, `stride`) per dimension.
//! A whole grid, a sub-rectangle, a single row or column, a transposed
//! grid and a single cell are all views of the same buffer; slicing never
//! copies cell data.
//!
//! # Dimensions
//!
//! - [`View<N>`](View): dimension fixed at compile time. Two-dimensional
//!   views index rows on axis [`HEIGHT`] and columns on axis [`WIDTH`].
//! - [`DynView`]: dimension chosen at runtime, used to squeeze away unit
//!   axes before fixing the dimension again.
//!
//! # Slicing
//!
//! Each axis is sliced by an [`Index`]: a position ([`Index::At`]), a
//! sub-range ([`Index::Span`]), or the whole axis ([`Index::All`]). A
//! sub-range is expressed in the axis' own coordinates and must fit
//! within the current axis length; violations are reported as
//! [`ViewError`]s rather than trusted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod buffer;
pub mod dynamic;
pub mod error;
pub mod lanes;
pub mod view;

pub use axis::{Axis, Index, Span};
pub use buffer::Buffer;
pub use dynamic::DynView;
pub use error::ViewError;
pub use lanes::{Lanes, Values};
pub use view::{View, HEIGHT, WIDTH};
