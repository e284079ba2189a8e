//! Demo-data fixture: a fixed 20-record competition roster.
//!
//! Used by the CLI's "fill with demo data" action and by tests that need
//! a known dataset (five Ukrainian athletes: ids 1, 2, 10, 16, 20).

use podium_common::error::StoreResult;

use crate::record::AthleteRecord;
use crate::store::RecordStore;

/// The literal demo roster, ids 1 through 20.
pub fn demo_records() -> Vec<AthleteRecord> {
    vec![
        AthleteRecord::new(1, "Andriy Kovalenko", "Ukraine", "100m Sprint", 10.34, 0, 980, "Gold"),
        AthleteRecord::new(2, "Olena Melnuk", "Ukraine", "200m Sprint", 22.75, 0, 970, "Silver"),
        AthleteRecord::new(3, "John Smith", "USA", "100m Sprint", 10.41, 1, 940, "Bronze"),
        AthleteRecord::new(4, "Marie Dubois", "France", "400m", 50.88, 0, 965, "Gold"),
        AthleteRecord::new(5, "Lukas Meyer", "Germany", "400m", 51.22, 0, 948, "None"),
        AthleteRecord::new(6, "Kenji Tanaka", "Japan", "800m", 107.45, 0, 951, "Silver"),
        AthleteRecord::new(7, "Marta Rossi", "Italy", "1500m", 239.18, 0, 959, "Gold"),
        AthleteRecord::new(8, "Ana Silva", "Portugal", "1500m", 242.03, 1, 930, "Bronze"),
        AthleteRecord::new(9, "Nora Jensen", "Denmark", "5000m", 892.64, 0, 962, "Gold"),
        AthleteRecord::new(10, "Iryna Bondar", "Ukraine", "5000m", 899.27, 0, 951, "Silver"),
        AthleteRecord::new(11, "David Brown", "UK", "Marathon", 7662.10, 0, 968, "Gold"),
        AthleteRecord::new(12, "Paolo Ricci", "Italy", "Marathon", 7721.52, 0, 955, "Silver"),
        AthleteRecord::new(13, "Sofia Novak", "Poland", "110m Hurdles", 12.95, 0, 976, "Gold"),
        AthleteRecord::new(14, "Carlos Diaz", "Spain", "110m Hurdles", 13.18, 1, 939, "Bronze"),
        AthleteRecord::new(15, "Emma Wilson", "Canada", "Long Jump", 6.91, 0, 972, "Gold"),
        AthleteRecord::new(16, "Danylo Petrenko", "Ukraine", "Long Jump", 6.83, 0, 957, "Silver"),
        AthleteRecord::new(17, "Ali Hassan", "Egypt", "Shot Put", 21.44, 0, 966, "Gold"),
        AthleteRecord::new(18, "Mia Larsen", "Norway", "Shot Put", 20.91, 0, 949, "Bronze"),
        AthleteRecord::new(19, "Rita Costa", "Brazil", "High Jump", 1.96, 0, 963, "Silver"),
        AthleteRecord::new(20, "Yaroslav Hnat", "Ukraine", "High Jump", 2.01, 0, 978, "Gold"),
    ]
}

/// Replace the store's contents with the demo roster.
pub fn seed_demo(store: &RecordStore) -> StoreResult<()> {
    store.overwrite_all(&demo_records())
}
