use crate::api::{Resource, Transformation};

use super::Style;

/// Prints a record as a header line followed by aligned fields.
pub fn print_record(record: &Resource) {
    println!(
        "{} {}",
        Style::code(format!("#{}", record.id())),
        Style::header(record.name())
    );

    let fields = record.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in fields {
        println!("  {}  {}", Style::label(format!("{label:<width$}")), value);
    }
    println!();
}

/// Prints one summary line per record.
pub fn print_record_list(records: &[Resource]) {
    for record in records {
        println!("{}", record.summary());
    }
}

pub fn print_transformations(character_name: &str, transformations: &[Transformation]) {
    if transformations.is_empty() {
        println!(
            "{}",
            Style::hint(format!("No transformations found for {character_name}"))
        );
        println!();
        return;
    }

    println!(
        "{}",
        Style::header(format!("Transformations of {character_name}"))
    );
    for transformation in transformations {
        println!(
            "  {} {}  {}",
            Style::code(format!("#{}", transformation.id)),
            Style::value(&transformation.name),
            Style::secondary(format!("ki {}", transformation.ki))
        );
    }
    println!();
}
