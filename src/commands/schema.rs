//! Implementation of the `portray schema` command.
//!
//! Lists categories and fields, as a table or as JSON.

use crate::cli::SchemaArgs;
use crate::error::{PortrayError, Result};
use crate::schema::{Category, ControlKind, registry};

/// Execute the `portray schema` command.
pub fn cmd_schema(args: SchemaArgs) -> Result<()> {
    let schema = registry()?;

    let categories: Vec<&Category> = match &args.category {
        Some(id) => {
            let category = schema.category(id).ok_or_else(|| {
                PortrayError::UserError(format!(
                    "unknown category '{}'.\n\nAvailable categories: {}",
                    id,
                    schema
                        .categories()
                        .iter()
                        .map(|c| c.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
            vec![category]
        }
        None => schema.categories().iter().collect(),
    };

    if args.json {
        let text = serde_json::to_string_pretty(&categories)
            .map_err(|e| PortrayError::IoError(format!("failed to serialize schema: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    for category in categories {
        println!("{} ({}, {} fields)", category.title, category.id, category.fields.len());
        if let Some(description) = &category.description {
            println!("  {}", description);
        }
        for field in &category.fields {
            println!(
                "  {:<40} {:<8} default: {}",
                field.key,
                field.kind.name(),
                field.default
            );
            if let ControlKind::Select { options } = &field.kind {
                println!("  {:<40} options: {}", "", options.join(" | "));
            }
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_listing_runs() {
        let args = SchemaArgs {
            category: None,
            json: false,
        };
        assert!(cmd_schema(args).is_ok());
    }

    #[test]
    fn schema_single_category() {
        let args = SchemaArgs {
            category: Some("camera".to_string()),
            json: true,
        };
        assert!(cmd_schema(args).is_ok());
    }

    #[test]
    fn schema_unknown_category_is_rejected() {
        let args = SchemaArgs {
            category: Some("wings".to_string()),
            json: false,
        };
        let err = cmd_schema(args).unwrap_err();
        assert!(err.to_string().contains("unknown category 'wings'"));
        assert!(err.to_string().contains("identity"));
    }
}
