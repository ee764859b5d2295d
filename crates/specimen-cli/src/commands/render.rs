//! Implementation of the `specimen render` command.

use std::sync::Arc;

use specimen_adapters::{JsonRenderer, SerializationPolicy};
use specimen_core::{
    application::{ExampleService, FieldEnumerator},
    domain::{FieldDescriptor, TypeName, TypeRegistry},
};
use tracing::{debug, instrument};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `specimen render` command.
///
/// 1. Load the manifests
/// 2. Resolve the root type (and the field, with `--field`)
/// 3. Merge flags over the configuration
/// 4. Synthesize, render, print
#[instrument(skip_all, fields(type_name = %args.type_name))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::load_catalog(&args.manifest)?;
    let registry = catalog.registry;

    let name = resolve_type(&registry, &args.type_name)?;
    let field = args
        .field
        .as_deref()
        .map(|field| resolve_field(&registry, &name, field))
        .transpose()?;

    let max_depth = args
        .max_depth
        .map(|depth| depth as usize)
        .unwrap_or(config.synthesis.max_depth);
    let policy = if args.raw {
        SerializationPolicy::raw()
    } else {
        config.render.policy
    };
    let pretty = config.render.pretty && !args.compact;
    debug!(max_depth, pretty, ?policy, "render settings");

    let renderer = JsonRenderer::new().with_policy(policy).pretty(pretty);
    let service = ExampleService::new(
        Arc::new(registry),
        Box::new(catalog.hints),
        Box::new(renderer),
    )
    .with_max_depth(max_depth)?;

    let text = match &field {
        Some(field) => service.render_field(field)?,
        None => service.render_type(&name)?,
    };
    output.data(&text)?;

    Ok(())
}

fn resolve_type(registry: &TypeRegistry, requested: &str) -> CliResult<TypeName> {
    let name = TypeName::try_new(requested).map_err(|e| CliError::InvalidInput {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;
    if registry.contains(&name) {
        return Ok(name);
    }

    let needle = requested.to_lowercase();
    let similar = registry
        .names()
        .map(TypeName::as_str)
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.contains(&needle) || needle.contains(&candidate)
        })
        .take(5)
        .map(str::to_string)
        .collect();

    Err(CliError::TypeNotFound {
        name: requested.to_string(),
        similar,
    })
}

/// The first field named `field` in enumeration order, so a subtype's field
/// wins over a shadowed supertype field.
fn resolve_field(
    registry: &TypeRegistry,
    type_name: &TypeName,
    field: &str,
) -> CliResult<FieldDescriptor> {
    let ty = registry.require(type_name).map_err(|e| CliError::Core(e.into()))?;
    let fields = FieldEnumerator::new(registry).all_fields(ty);

    fields
        .iter()
        .find(|candidate| candidate.name() == field)
        .map(|candidate| (*candidate).clone())
        .ok_or_else(|| CliError::FieldNotFound {
            type_name: type_name.to_string(),
            field: field.to_string(),
            available: fields.iter().map(|f| f.name().to_string()).collect(),
        })
}
