//! Parser-facing access to the token list.
//!
//! The grammar itself lives downstream; this module only provides the
//! token cursor a recursive-descent parser drives.

pub mod stream;

pub use stream::PeekTokenStream;
