//! Implementation of the `portray show` command.
//!
//! Displays one field's full definition.

use crate::cli::ShowArgs;
use crate::error::{PortrayError, Result};
use crate::schema::{ControlKind, registry};

/// Execute the `portray show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let schema = registry()?;

    let found = schema.categories().iter().find_map(|category| {
        category
            .fields
            .iter()
            .find(|f| f.key == args.key)
            .map(|field| (category, field))
    });

    let (category, field) = found.ok_or_else(|| {
        PortrayError::UserError(format!(
            "unknown field key '{}'.\n\n\
             Use `portray schema` to list available fields.",
            args.key
        ))
    })?;

    println!("Key:       {}", field.key);
    println!("Label:     {}", field.label);
    println!("Category:  {} ({})", category.title, category.id);
    println!("Kind:      {}", field.kind.name());

    match &field.kind {
        ControlKind::Select { options } => {
            println!("Options:   {}", options.join(" | "));
        }
        ControlKind::Number { min, max, step } | ControlKind::Slider { min, max, step } => {
            println!("Range:     {} to {} (step {})", min, max, step);
        }
        ControlKind::Text { placeholder } => {
            if let Some(placeholder) = placeholder {
                println!("Hint:      {}", placeholder);
            }
        }
        ControlKind::Toggle => {}
    }

    println!("Default:   {}", field.default);
    Ok(())
}
