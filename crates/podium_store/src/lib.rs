//! Fixed-schema flat-file record store for athletic-competition results.
//!
//! The database file is a dense array of fixed-width binary records with
//! no header or delimiters; record *i* lives at byte offset
//! `i * codec::RECORD_WIDTH`. A caller loads the full record collection
//! from the [`store::RecordStore`], applies [`query`]/[`mutate`]
//! operations in memory, and persists mutations by rewriting the whole
//! file. There is no partial-file update path.

pub mod codec;
pub mod mutate;
pub mod query;
pub mod record;
pub mod seed;
pub mod stats;
pub mod store;

pub use record::AthleteRecord;
pub use store::RecordStore;
