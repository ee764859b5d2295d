//! Implementation of the `specimen types` command.

use serde_json::json;
use specimen_core::{
    application::{TypeClassifier, TypeSummary},
    domain::{BUILTIN_COLLECTIONS, BUILTIN_MAPS, TypeName},
    error::Context as _,
};

use crate::{
    cli::{ListFormat, OutputFormat, TypesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TypesArgs, output: OutputManager) -> CliResult<()> {
    let catalog = super::load_catalog(&args.manifest)?;
    let summaries: Vec<TypeSummary> = TypeSummary::all(&catalog.registry)
        .into_iter()
        .filter(|summary| args.all || !is_builtin(&summary.name))
        .collect();

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => ListFormat::Table,
    });

    match format {
        ListFormat::Table => {
            if summaries.is_empty() {
                output.warning("No types described by the manifests")?;
                return Ok(());
            }
            output.header("Registered Types:")?;
            let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
            for summary in &summaries {
                let mut detail = summary.category.to_string();
                if let Some(supertype) = &summary.supertype {
                    detail.push_str(&format!(" extends {supertype}"));
                }
                if summary.field_count > 0 {
                    detail.push_str(&format!(", {} fields", summary.field_count));
                }
                output.status(&format!(
                    "  {:<width$}  {}",
                    summary.name,
                    output.dim(&detail)
                ))?;
            }
        }

        ListFormat::List => {
            for summary in &summaries {
                output.data(&summary.name)?;
            }
        }

        // JSON must stay parseable in pipes, so it goes through `data`.
        ListFormat::Json => {
            let rows: Vec<_> = summaries
                .iter()
                .map(|s| {
                    json!({
                        "name": s.name,
                        "category": s.category.to_string(),
                        "supertype": s.supertype,
                        "field_count": s.field_count,
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&rows).context("serialising type list")?;
            output.data(&text)?;
        }
    }

    Ok(())
}

/// Scalars and raw containers every catalog starts with.
fn is_builtin(name: &str) -> bool {
    TypeName::try_new(name).is_ok_and(|name| TypeClassifier::is_base_type(&name))
        || BUILTIN_COLLECTIONS.contains(&name)
        || BUILTIN_MAPS.contains(&name)
}
