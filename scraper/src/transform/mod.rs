//! Transformation module.
//!
//! This module turns upstream records into output records:
//! - Mappings: Static lookups (canton, council, function, language)
//! - Assembler: Memberships to faction members

pub mod assembler;
pub mod mappings;

pub use assembler::{assemble_member, assemble_members};
pub use mappings::{canton_code, council_code, extract_language, faction_function};
