//! # Facture CLI
//!
//! Usage:
//!   facture invoice.json --template modern -o invoice.pdf
//!   echo '{ ... }' | facture --template bold --format html
//!   facture --example > invoice.json
//!   facture --list-templates

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use facture::model::InvoiceRecord;
use facture::template::{catalog, TemplateId};
use facture::{export_markup, export_paginated};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Handle --example flag: print the seed record as editable JSON
    if args.iter().any(|a| a == "--example") {
        let json = serde_json::to_string_pretty(&InvoiceRecord::seed())
            .expect("seed record always serializes");
        println!("{}", json);
        return;
    }

    if args.iter().any(|a| a == "--list-templates") {
        for descriptor in catalog() {
            println!(
                "{:<14} {:<14} {}",
                descriptor.id, descriptor.name, descriptor.description
            );
        }
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    };

    let template_arg = flag_value(&args, "--template").unwrap_or_else(|| "classic".to_string());
    let format = flag_value(&args, "--format").unwrap_or_else(|| "pdf".to_string());

    let template: TemplateId = match template_arg.parse() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let record = match InvoiceRecord::from_json(&input) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let export = match format.as_str() {
        "pdf" => export_paginated(&record, template),
        "html" => export_markup(&record, template),
        other => {
            eprintln!("✗ Unknown format '{}' (expected pdf or html)", other);
            std::process::exit(1);
        }
    };

    // `-o` may name a directory, in which case the contractual filename
    // lands inside it.
    let output_path = match flag_value(&args, "-o") {
        Some(path) if Path::new(&path).is_dir() => Path::new(&path)
            .join(&export.filename)
            .to_string_lossy()
            .into_owned(),
        Some(path) => path,
        None => export.filename.clone(),
    };
    fs::write(&output_path, &export.bytes).expect("Failed to write output");
    eprintln!("✓ Written {} bytes to {}", export.bytes.len(), output_path);
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
