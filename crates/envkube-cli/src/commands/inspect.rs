//! Inspect command - show parsed entries and their classification

use console::style;
use envkube_core::{Entry, parse};
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use super::{apply_overrides, read_env_file};

pub fn run(env_file: &Path, secret_keys: &[String], plain_keys: &[String], json: bool) -> Result<()> {
    let content = read_env_file(env_file)?;

    let mut entries = parse(&content);
    apply_overrides(&mut entries, secret_keys, plain_keys)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).into_diagnostic()?
        );
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", style("No entries parsed").yellow());
        return Ok(());
    }

    let key_width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);

    for entry in &entries {
        print_entry(entry, key_width);
    }

    let secrets = entries.iter().filter(|e| e.is_secret).count();
    println!();
    println!(
        "{} {} entries, {} secret, {} plain",
        style("Σ").dim(),
        entries.len(),
        secrets,
        entries.len() - secrets
    );

    Ok(())
}

fn print_entry(entry: &Entry, key_width: usize) {
    let marker = if entry.is_secret {
        style("secret").red().bold()
    } else {
        style("config").green()
    };

    // Pad before styling so ANSI codes don't count against the width
    println!(
        "{} {}  {}",
        marker,
        style(format!("{:key_width$}", entry.key)).bold(),
        style(&entry.value).dim()
    );
}
