//! The fixed-layout entity schema.
//!
//! Text fields are length-bounded: values longer than the field capacity
//! are silently truncated at construction; that is the contract, not an
//! error. Capacities are in bytes (one byte per field is reserved for the
//! on-disk NUL terminator); truncation backs off to a UTF-8 character
//! boundary so a stored value is always valid UTF-8.

/// Usable bytes of the athlete name (50-byte field minus NUL).
pub const NAME_CAPACITY: usize = 49;
/// Usable bytes of the country (30-byte field minus NUL).
pub const COUNTRY_CAPACITY: usize = 29;
/// Usable bytes of the discipline (40-byte field minus NUL).
pub const DISCIPLINE_CAPACITY: usize = 39;
/// Usable bytes of the medal (12-byte field minus NUL).
pub const MEDAL_CAPACITY: usize = 11;

/// One competition result.
///
/// `id` is caller-assigned and NOT guaranteed unique: the store treats
/// uniqueness as a usage convention, never enforced. Numeric fields carry
/// no range validation. `medal` is conventionally one of
/// "Gold"/"Silver"/"Bronze"/"None" but any value is accepted.
///
/// Fields are private: the truncating constructor is the only way to
/// build a record, so every in-memory record already fits the on-disk
/// field widths. There are no field-level setters; records are mutated
/// only by whole-record replacement (see [`crate::mutate`]).
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteRecord {
    id: i32,
    name: String,
    country: String,
    discipline: String,
    result_seconds: f64,
    penalties: i32,
    points: i32,
    medal: String,
}

impl AthleteRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        name: &str,
        country: &str,
        discipline: &str,
        result_seconds: f64,
        penalties: i32,
        points: i32,
        medal: &str,
    ) -> Self {
        Self {
            id,
            name: truncate_to_capacity(name, NAME_CAPACITY),
            country: truncate_to_capacity(country, COUNTRY_CAPACITY),
            discipline: truncate_to_capacity(discipline, DISCIPLINE_CAPACITY),
            result_seconds,
            penalties,
            points,
            medal: truncate_to_capacity(medal, MEDAL_CAPACITY),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn result_seconds(&self) -> f64 {
        self.result_seconds
    }

    pub fn penalties(&self) -> i32 {
        self.penalties
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn medal(&self) -> &str {
        &self.medal
    }
}

/// Truncate `value` to at most `capacity` bytes, backing off to a UTF-8
/// character boundary. Values that already fit are returned unchanged.
fn truncate_to_capacity(value: &str, capacity: usize) -> String {
    if value.len() <= capacity {
        return value.to_string();
    }
    let mut end = capacity;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_values_kept_verbatim() {
        let record = AthleteRecord::new(1, "Jan Novak", "Czechia", "400m", 50.1, 0, 940, "None");
        assert_eq!(record.name(), "Jan Novak");
        assert_eq!(record.country(), "Czechia");
        assert_eq!(record.medal(), "None");
    }

    #[test]
    fn test_overlong_name_is_truncated_to_capacity() {
        let long_name = "x".repeat(120);
        let record = AthleteRecord::new(1, &long_name, "A", "B", 0.0, 0, 0, "None");
        assert_eq!(record.name().len(), NAME_CAPACITY);
        assert_eq!(record.name(), &long_name[..NAME_CAPACITY]);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is 2 bytes in UTF-8; 25 of them is 50 bytes, one over capacity.
        let name: String = "é".repeat(25);
        let record = AthleteRecord::new(1, &name, "A", "B", 0.0, 0, 0, "None");
        assert!(record.name().len() <= NAME_CAPACITY);
        assert_eq!(record.name(), "é".repeat(24));
    }

    #[test]
    fn test_exact_capacity_not_truncated() {
        let name = "n".repeat(NAME_CAPACITY);
        let record = AthleteRecord::new(1, &name, "A", "B", 0.0, 0, 0, "None");
        assert_eq!(record.name(), name);
    }

    #[test]
    fn test_all_text_fields_bounded() {
        let big = "y".repeat(200);
        let record = AthleteRecord::new(7, &big, &big, &big, 1.0, 2, 3, &big);
        assert_eq!(record.name().len(), NAME_CAPACITY);
        assert_eq!(record.country().len(), COUNTRY_CAPACITY);
        assert_eq!(record.discipline().len(), DISCIPLINE_CAPACITY);
        assert_eq!(record.medal().len(), MEDAL_CAPACITY);
    }

    #[test]
    fn test_numeric_fields_unvalidated() {
        // Negative counts and times are accepted; validation is out of scope.
        let record = AthleteRecord::new(-5, "a", "b", "c", -1.5, -3, -10, "Gold");
        assert_eq!(record.id(), -5);
        assert_eq!(record.penalties(), -3);
        assert_eq!(record.result_seconds(), -1.5);
    }
}
