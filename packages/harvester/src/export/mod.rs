//! Export of collected reviews to files.
//!
//! Both formats write the six review fields in [`Review::FIELD_NAMES`] order.
//!
//! [`Review::FIELD_NAMES`]: crate::types::Review::FIELD_NAMES

mod delimited;
mod xml;

pub use delimited::{save_delimited, write_delimited};
pub use xml::{generate_xml, save_xml};
