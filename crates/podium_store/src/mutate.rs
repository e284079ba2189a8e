//! In-memory update and delete by id.
//!
//! Both operations touch only the loaded collection; the caller persists
//! the result with [`crate::store::RecordStore::overwrite_all`]. There is
//! no atomic mutate-and-persist: a crash between the two loses the
//! change, a crash mid-overwrite can leave a truncated file.
//!
//! Deliberate asymmetry: update replaces only the FIRST matching record,
//! remove drops EVERY match. Callers that need deterministic "update the
//! one record" semantics must keep ids unique themselves; the store never
//! enforces uniqueness.

use crate::record::AthleteRecord;

/// Replace the first record whose id matches with `replacement`, in full
/// (whole-record substitution; field-level merge does not exist).
/// Returns whether a match was found.
pub fn update_by_id(records: &mut [AthleteRecord], id: i32, replacement: AthleteRecord) -> bool {
    match records.iter_mut().find(|r| r.id() == id) {
        Some(slot) => {
            *slot = replacement;
            true
        }
        None => false,
    }
}

/// Remove every record whose id matches. Returns whether at least one
/// record was removed.
pub fn remove_by_id(records: &mut Vec<AthleteRecord>, id: i32) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}
