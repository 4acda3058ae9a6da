//! Codec Module
//!
//! Converts the whole coffee collection to and from its durable text form.
//!
//! ## Format
//! A single JSON array of record objects (see [`crate::model`]). Absent
//! optionals are omitted on encode and read back as unset. Unknown fields are
//! ignored on decode.
//!
//! ## Failure Policy
//! - [`try_decode`] is strict and reports why the text is unusable.
//! - [`decode`] routes any failure through [`recover_empty`], which yields an
//!   empty collection. This cannot tell "never written" from "corrupted";
//!   tightening it only needs a change in `recover_empty`.

mod collection;

pub use collection::{decode, encode, encode_with, recover_empty, try_decode};
