//! Fixed-width binary record format.
//!
//! Canonical layout, little-endian, no padding between fields:
//! ```text
//!   offset  width  field
//!   0       4      id               i32
//!   4       50     name             UTF-8, NUL-padded
//!   54      30     country          UTF-8, NUL-padded
//!   84      40     discipline       UTF-8, NUL-padded
//!   124     8      result_seconds   f64 (IEEE-754)
//!   132     4      penalties        i32
//!   136     4      points           i32
//!   140     12     medal            UTF-8, NUL-padded
//!           ---
//!           152    RECORD_WIDTH
//! ```
//!
//! Every record occupies exactly [`RECORD_WIDTH`] bytes, so a file is a
//! dense array with record *i* at byte offset `i * RECORD_WIDTH`. No
//! header, no magic, no version tag. The layout fixes one canonical
//! width and alignment so files are portable across platforms.
//!
//! Text fields hold at most `width - 1` data bytes followed by at least
//! one NUL; unused tail bytes are zero. Construction-time truncation (see
//! [`crate::record`]) guarantees values fit, and zero-padding makes
//! field-equal records byte-identical on disk.

use crate::record::AthleteRecord;

/// On-disk width of the name field.
pub const NAME_WIDTH: usize = 50;
/// On-disk width of the country field.
pub const COUNTRY_WIDTH: usize = 30;
/// On-disk width of the discipline field.
pub const DISCIPLINE_WIDTH: usize = 40;
/// On-disk width of the medal field.
pub const MEDAL_WIDTH: usize = 12;

/// Total encoded size of one record.
pub const RECORD_WIDTH: usize = 4 + NAME_WIDTH + COUNTRY_WIDTH + DISCIPLINE_WIDTH + 8 + 4 + 4 + MEDAL_WIDTH;

/// Encode one record into its fixed-width form.
pub fn encode_record(record: &AthleteRecord) -> [u8; RECORD_WIDTH] {
    let mut buf = [0u8; RECORD_WIDTH];
    let mut pos = 0;

    buf[pos..pos + 4].copy_from_slice(&record.id().to_le_bytes());
    pos += 4;
    put_text(&mut buf, &mut pos, record.name(), NAME_WIDTH);
    put_text(&mut buf, &mut pos, record.country(), COUNTRY_WIDTH);
    put_text(&mut buf, &mut pos, record.discipline(), DISCIPLINE_WIDTH);
    buf[pos..pos + 8].copy_from_slice(&record.result_seconds().to_le_bytes());
    pos += 8;
    buf[pos..pos + 4].copy_from_slice(&record.penalties().to_le_bytes());
    pos += 4;
    buf[pos..pos + 4].copy_from_slice(&record.points().to_le_bytes());
    pos += 4;
    put_text(&mut buf, &mut pos, record.medal(), MEDAL_WIDTH);

    debug_assert_eq!(pos, RECORD_WIDTH);
    buf
}

/// Decode one record from exactly [`RECORD_WIDTH`] bytes.
///
/// Text fields are read up to the first NUL; malformed UTF-8 goes through
/// lossy conversion rather than failing the whole read.
pub fn decode_record(bytes: &[u8; RECORD_WIDTH]) -> AthleteRecord {
    let mut pos = 0;

    let id = i32::from_le_bytes(read_array(bytes, &mut pos));
    let name = take_text(bytes, &mut pos, NAME_WIDTH);
    let country = take_text(bytes, &mut pos, COUNTRY_WIDTH);
    let discipline = take_text(bytes, &mut pos, DISCIPLINE_WIDTH);
    let result_seconds = f64::from_le_bytes(read_array(bytes, &mut pos));
    let penalties = i32::from_le_bytes(read_array(bytes, &mut pos));
    let points = i32::from_le_bytes(read_array(bytes, &mut pos));
    let medal = take_text(bytes, &mut pos, MEDAL_WIDTH);

    AthleteRecord::new(
        id,
        &name,
        &country,
        &discipline,
        result_seconds,
        penalties,
        points,
        &medal,
    )
}

fn put_text(buf: &mut [u8], pos: &mut usize, value: &str, width: usize) {
    let data = value.as_bytes();
    // Construction bounds values to width - 1 bytes; guard anyway so the
    // terminator byte can never be overwritten.
    let len = data.len().min(width - 1);
    buf[*pos..*pos + len].copy_from_slice(&data[..len]);
    // Remaining bytes are already zero (NUL terminator + padding).
    *pos += width;
}

fn take_text(bytes: &[u8; RECORD_WIDTH], pos: &mut usize, width: usize) -> String {
    let field = &bytes[*pos..*pos + width];
    *pos += width;
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn read_array<const N: usize>(bytes: &[u8; RECORD_WIDTH], pos: &mut usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*pos..*pos + N]);
    *pos += N;
    out
}
