//! Tabular and summary rendering. Presentation only; the store layer
//! knows nothing about any of this.

use podium_store::stats::Statistics;
use podium_store::AthleteRecord;

/// Print records as a fixed-width table, or a friendly notice when the
/// result set is empty (an empty set is a normal outcome, not an error).
pub fn print_records_table(records: &[AthleteRecord]) {
    if records.is_empty() {
        println!("Database is empty or no records matched.");
        return;
    }

    println!(
        "{:<5} {:<24} {:<14} {:<18} {:<12} {:<10} {:<9} {:<10}",
        "ID", "Athlete", "Country", "Discipline", "Time(s)", "Penalties", "Points", "Medal"
    );
    println!("{}", "-".repeat(102));
    for record in records {
        print_record(record);
    }
}

pub fn print_record(record: &AthleteRecord) {
    println!(
        "{:<5} {:<24} {:<14} {:<18} {:<12.2} {:<10} {:<9} {:<10}",
        record.id(),
        record.name(),
        record.country(),
        record.discipline(),
        record.result_seconds(),
        record.penalties(),
        record.points(),
        record.medal()
    );
}

pub fn print_statistics(stats: Option<Statistics>) {
    let Some(stats) = stats else {
        println!("No data to compute statistics.");
        return;
    };
    println!("Record count:          {}", stats.record_count);
    println!("Mean result (s):       {:.2}", stats.mean_result_seconds);
    println!("Mean points:           {:.2}", stats.mean_points);
    println!("Gold medals:           {}", stats.gold_medals);
}
