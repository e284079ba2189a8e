//! Field-by-field prompts. The core only needs "construct one record
//! from caller-supplied values"; overflow handling is the record
//! constructor's truncation rule, so nothing here validates lengths.

use anyhow::{Context, Result};
use podium_store::AthleteRecord;
use rustyline::DefaultEditor;

pub fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    let line = rl.readline(prompt)?;
    Ok(line.trim().to_string())
}

fn prompt_i32(rl: &mut DefaultEditor, prompt: &str) -> Result<i32> {
    let line = prompt_line(rl, prompt)?;
    line.parse()
        .with_context(|| format!("expected an integer, got {:?}", line))
}

fn prompt_f64(rl: &mut DefaultEditor, prompt: &str) -> Result<f64> {
    let line = prompt_line(rl, prompt)?;
    line.parse()
        .with_context(|| format!("expected a number, got {:?}", line))
}

/// Build one fully-populated candidate record from the terminal.
pub fn prompt_record(rl: &mut DefaultEditor) -> Result<AthleteRecord> {
    let id = prompt_i32(rl, "ID: ")?;
    let name = prompt_line(rl, "Athlete name: ")?;
    let country = prompt_line(rl, "Country: ")?;
    let discipline = prompt_line(rl, "Discipline: ")?;
    let result_seconds = prompt_f64(rl, "Result in seconds: ")?;
    let penalties = prompt_i32(rl, "Penalty count: ")?;
    let points = prompt_i32(rl, "Points: ")?;
    let medal = prompt_line(rl, "Medal (Gold/Silver/Bronze/None): ")?;

    Ok(AthleteRecord::new(
        id,
        &name,
        &country,
        &discipline,
        result_seconds,
        penalties,
        points,
        &medal,
    ))
}

pub fn prompt_id(rl: &mut DefaultEditor, prompt: &str) -> Result<i32> {
    prompt_i32(rl, prompt)
}

pub fn prompt_seconds(rl: &mut DefaultEditor, prompt: &str) -> Result<f64> {
    prompt_f64(rl, prompt)
}
