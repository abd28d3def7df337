//! Decoders for catalog payloads delivered by the data service.
//!
//! Payloads are untrusted: they are decoded into wire structs first and only
//! become [`Constellation`](crate::Constellation) records after validation.

pub mod api;

pub use api::{decode_collection, decode_detail, load_constellations_from_file};
