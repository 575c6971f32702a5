//! The normalisation pipeline between form state and the wire schema.
//!
//! - [`keys`]: awkward-key translation table
//! - [`temporal`]: ISO-8601 text and wire temporal values
//! - [`optionality`]: selector and raw text to three-state presence
//! - [`nested`]: tag/metric bag, line items, notes, binary attachment
//! - [`assembler`]: outbound assembly and inbound inversion
//!
//! Every operation is a pure function of its inputs. The only external
//! influence is the injected [`mockable::Clock`], consulted when a timestamp
//! has to be substituted.

pub mod assembler;
pub mod keys;
pub mod nested;
pub mod optionality;
pub mod temporal;

pub use assembler::{assemble_outbound, build_local, form_from_local, invert_inbound, local_to_wire};
pub use keys::{AwkwardKey, KeyNaming, rename_keys, to_local_key, to_wire_key};
