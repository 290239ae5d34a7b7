use crate::api::ResourceKind;
use crate::ui::Style;

/// Prints every resource kind with its alias and endpoint.
pub fn run_kinds() {
    println!("{}", Style::header("Resource kinds"));
    for kind in ResourceKind::ALL {
        let marker = if kind.is_default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {:<16} {}{marker}",
            Style::code(kind.alias()),
            Style::command(format!(":{}", kind.name())),
            Style::secondary(kind.endpoint()),
        );
    }

    let relations: Vec<_> = ResourceKind::ALL
        .iter()
        .flat_map(|kind| kind.relations().iter().map(move |binding| (*kind, binding)))
        .collect();
    if !relations.is_empty() {
        println!();
        println!("{}", Style::header("Relations"));
        for (kind, binding) in relations {
            println!(
                "  {} {} {}",
                Style::value(kind.name()),
                Style::code(format!("[{}]", binding.key)),
                binding.label
            );
        }
    }
}
