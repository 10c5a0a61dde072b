//! Cartwheel Core - Cart domain library.
//!
//! The cart for one shopper lives entirely inside a single cookie value;
//! there is no server-side session store. This crate provides everything
//! needed to work with that state:
//!
//! - [`types`] - `ItemId` and the `LineItem` snapshot record
//! - [`cart`] - an ordered, id-unique collection of line items
//! - [`codec`] - the lossless mapping between a [`cart::Cart`] and its
//!   cookie-safe string representation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients. The `storefront` crate owns the transport (reading and
//! writing the actual cookie header) and the catalog lookup.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod codec;
pub mod types;

pub use cart::Cart;
pub use codec::{CodecError, decode, encode};
pub use types::{ItemId, LineItem};
