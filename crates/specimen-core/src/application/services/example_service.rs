//! Example Service - main application entry point.
//!
//! This service coordinates one documentation request:
//! 1. Resolve the root type in the catalog
//! 2. Synthesize its example value
//! 3. Render the value through the configured renderer
//!
//! It owns its adapters, so it can be built once at start-up and shared.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{HintResolver, TypeCatalog, ValueRenderer},
        services::{DEFAULT_MAX_DEPTH, ExampleSynthesizer, FieldEnumerator, TypeClassifier},
    },
    domain::{Category, ExampleValue, FieldDescriptor, TypeName},
    error::SpecimenResult,
};

/// Information about a registered type for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
    pub name: String,
    pub category: Category,
    pub supertype: Option<String>,
    /// Flattened field count, inherited fields included.
    pub field_count: usize,
}

impl TypeSummary {
    /// Summarise every type in `catalog`, in catalog order.
    ///
    /// Needs neither hints nor a renderer, so listing works without a full
    /// [`ExampleService`].
    pub fn all(catalog: &dyn TypeCatalog) -> Vec<Self> {
        let classifier = TypeClassifier::new(catalog);
        let enumerator = FieldEnumerator::new(catalog);

        catalog
            .type_names()
            .into_iter()
            .filter_map(|name| catalog.lookup(&name))
            .map(|ty| Self {
                name: ty.name().to_string(),
                category: classifier.classify(ty),
                supertype: ty.supertype().map(|s| s.to_string()),
                field_count: enumerator.all_fields(ty).len(),
            })
            .collect()
    }
}

/// Main example service.
pub struct ExampleService {
    catalog: Arc<dyn TypeCatalog>,
    hints: Box<dyn HintResolver>,
    renderer: Box<dyn ValueRenderer>,
    max_depth: usize,
}

impl ExampleService {
    /// Create a new example service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use specimen_core::application::{DescriptorHints, ExampleService};
    /// use specimen_core::domain::TypeRegistry;
    ///
    /// let service = ExampleService::new(
    ///     Arc::new(TypeRegistry::with_builtins()),
    ///     Box::new(DescriptorHints),
    ///     renderer, // impl ValueRenderer
    /// );
    /// ```
    pub fn new(
        catalog: Arc<dyn TypeCatalog>,
        hints: Box<dyn HintResolver>,
        renderer: Box<dyn ValueRenderer>,
    ) -> Self {
        Self {
            catalog,
            hints,
            renderer,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the depth ceiling. Zero is rejected because every value would
    /// be `null`.
    pub fn with_max_depth(mut self, max_depth: usize) -> SpecimenResult<Self> {
        if max_depth == 0 {
            return Err(ApplicationError::InvalidMaxDepth { depth: max_depth }.into());
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Synthesize the example value of a registered type.
    #[instrument(skip_all, fields(type_name = %name, max_depth = self.max_depth))]
    pub fn example(&self, name: &TypeName) -> SpecimenResult<ExampleValue> {
        let value = self.synthesizer().synthesize_named(name)?;
        debug!(nesting = value.composite_depth(), "example synthesized");
        Ok(value)
    }

    /// Synthesize the example value of a field's declared type.
    #[instrument(skip_all, fields(field = field.name(), type_name = %field.type_name()))]
    pub fn example_for_field(&self, field: &FieldDescriptor) -> SpecimenResult<ExampleValue> {
        self.synthesizer().synthesize_field(field)
    }

    /// Synthesize and render, optionally with a field giving generic context.
    #[instrument(skip_all, fields(type_name = %name))]
    pub fn render(
        &self,
        field: Option<&FieldDescriptor>,
        name: &TypeName,
    ) -> SpecimenResult<String> {
        let synthesizer = self.synthesizer();
        let ty = self
            .catalog
            .lookup(name)
            .ok_or_else(|| ApplicationError::UnknownType {
                name: name.to_string(),
            })?;

        let value = synthesizer.synthesize(field, ty, 0);
        let text = self.renderer.render(&value)?;
        info!(bytes = text.len(), "example rendered");
        Ok(text)
    }

    /// Render a type reached without field context.
    pub fn render_type(&self, name: &TypeName) -> SpecimenResult<String> {
        self.render(None, name)
    }

    /// Render a field's declared type with the field as context.
    pub fn render_field(&self, field: &FieldDescriptor) -> SpecimenResult<String> {
        self.render(Some(field), field.type_name())
    }

    /// List all registered types with their categories.
    pub fn list_types(&self) -> Vec<TypeSummary> {
        TypeSummary::all(self.catalog.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn synthesizer(&self) -> ExampleSynthesizer<'_> {
        ExampleSynthesizer::new(self.catalog.as_ref(), self.hints.as_ref())
            .with_max_depth(self.max_depth)
    }
}
