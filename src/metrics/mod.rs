//! Quality metrics written alongside the audio.

pub mod sqnr;

pub use sqnr::{estimate, format_sqnr, write_sqnr, DB_PER_BIT};
