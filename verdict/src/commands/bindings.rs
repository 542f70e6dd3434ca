// verdict/src/commands/bindings.rs
//
// USE CASE: Show which error each declared constraint kind raises.

use comfy_table::Table;
use verdict_core::domain::BindingResolver;

use crate::account::DECLARED_KINDS;

pub fn execute() -> anyhow::Result<()> {
    let registry = verdict_core::global()?;

    let mut table = Table::new();
    table.set_header(vec!["Constraint", "Raises"]);
    for kind in &DECLARED_KINDS {
        let raises = match registry.resolve(kind) {
            Some(binding) => binding.error_type().to_string(),
            None => "(violation handler)".to_string(),
        };
        table.add_row(vec![kind.to_string(), raises]);
    }

    println!("{}", table);
    println!("{} of {} constraint kinds bound", registry.len(), DECLARED_KINDS.len());
    Ok(())
}
