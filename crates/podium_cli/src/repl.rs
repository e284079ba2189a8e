//! The interactive menu loop, thin glue over the store crate. Errors
//! inside an action are printed and the loop continues; only losing the
//! terminal ends the session.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use podium_store::seed::seed_demo;
use podium_store::stats::Statistics;
use podium_store::{mutate, query, RecordStore};

use crate::format::{print_records_table, print_statistics};
use crate::input::{prompt_id, prompt_line, prompt_record, prompt_seconds};

fn print_menu() {
    println!();
    println!("===== Athletic competition database =====");
    println!(" 1. Create a new database file");
    println!(" 2. Add a record from the keyboard");
    println!(" 3. List all records");
    println!(" 4. Search by ID");
    println!(" 5. Search by country");
    println!(" 6. Search by discipline");
    println!(" 7. Complex search (discipline + max time + min points)");
    println!(" 8. Sort by points and save");
    println!(" 9. Sort by result and save");
    println!("10. Update a record by ID");
    println!("11. Delete a record by ID");
    println!("12. Summary statistics");
    println!("13. Fill with demo data (20 records)");
    println!("14. Switch database file");
    println!(" 0. Quit");
}

pub fn run_menu(mut store: RecordStore) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "podium v{} (database file: {})",
        env!("CARGO_PKG_VERSION"),
        store.path().display()
    );

    loop {
        print_menu();
        let choice = match rl.readline("Your choice: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        };

        if choice == "0" {
            println!("Goodbye.");
            break;
        }

        if let Err(e) = run_action(&choice, &mut store, &mut rl) {
            // Ctrl-C/Ctrl-D inside a prompt ends the session too.
            if e.downcast_ref::<ReadlineError>().is_some() {
                break;
            }
            eprintln!("podium: {:#}", e);
        }
    }

    Ok(())
}

fn run_action(choice: &str, store: &mut RecordStore, rl: &mut DefaultEditor) -> Result<()> {
    match choice {
        "1" => {
            store.create()?;
            println!("Database file created: {}", store.path().display());
        }
        "2" => {
            let record = prompt_record(rl)?;
            store.append(&record)?;
            println!("Record added.");
        }
        "3" => print_records_table(&store.read_all()),
        "4" => {
            let id = prompt_id(rl, "ID: ")?;
            print_records_table(&query::search_by_id(&store.read_all(), id));
        }
        "5" => {
            let country = prompt_line(rl, "Country: ")?;
            print_records_table(&query::search_by_country(&store.read_all(), &country));
        }
        "6" => {
            let discipline = prompt_line(rl, "Discipline: ")?;
            print_records_table(&query::search_by_discipline(&store.read_all(), &discipline));
        }
        "7" => {
            let discipline = prompt_line(rl, "Discipline: ")?;
            let max_seconds = prompt_seconds(rl, "Maximum result (s): ")?;
            let min_points = prompt_id(rl, "Minimum points: ")?;
            print_records_table(&query::search_complex(
                &store.read_all(),
                &discipline,
                max_seconds,
                min_points,
            ));
        }
        "8" => {
            let sorted = query::sort_by_points(&store.read_all());
            store.overwrite_all(&sorted)?;
            println!("Sorted by points and saved.");
        }
        "9" => {
            let sorted = query::sort_by_result(&store.read_all());
            store.overwrite_all(&sorted)?;
            println!("Sorted by result and saved.");
        }
        "10" => {
            let id = prompt_id(rl, "ID of the record to update: ")?;
            let mut records = store.read_all();
            let replacement = prompt_record(rl)?;
            if mutate::update_by_id(&mut records, id, replacement) {
                store.overwrite_all(&records)?;
                println!("Record updated.");
            } else {
                println!("No record with ID {}.", id);
            }
        }
        "11" => {
            let id = prompt_id(rl, "ID of the record to delete: ")?;
            let mut records = store.read_all();
            if mutate::remove_by_id(&mut records, id) {
                store.overwrite_all(&records)?;
                println!("Record deleted.");
            } else {
                println!("No record with ID {}.", id);
            }
        }
        "12" => print_statistics(Statistics::compute(&store.read_all())),
        "13" => {
            seed_demo(store)?;
            println!("Database filled with 20 demo records.");
        }
        "14" => {
            let path = prompt_line(rl, "Database file name (e.g. competition.dat): ")?;
            if path.is_empty() {
                println!("File name unchanged.");
            } else {
                *store = RecordStore::new(path);
                println!("Current database file: {}", store.path().display());
            }
        }
        other => println!("Unknown menu item: {}", other),
    }
    Ok(())
}
