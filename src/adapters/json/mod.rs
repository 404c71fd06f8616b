//! Streaming JSON decoding of port catalog documents.
//!
//! A catalog document is one JSON object keyed by port id:
//!
//! ```json
//! {
//!   "AEAJM": { "name": "Ajman", "code": "52000", "coordinates": [55.51, 25.40] },
//!   "AEAUH": { "name": "Abu Dhabi", "code": "52001" }
//! }
//! ```
//!
//! [`PortDecoder`] walks the top level token by token and deserializes one
//! entry at a time, so memory use is bounded by the largest single entry
//! rather than the document. It is exposed to the application layer only as a
//! [`PortEntrySource`](crate::ports::PortEntrySource).

mod decoder;
mod token;

pub use decoder::PortDecoder;
