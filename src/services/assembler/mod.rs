pub mod expansion;
pub mod assembler_service;

pub use expansion::ReferenceLookup;
