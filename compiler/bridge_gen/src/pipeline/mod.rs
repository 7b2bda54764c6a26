//! Batch driver: scope registry → interfaces → classes → rendering.
//!
//! Portable (no filesystem IO). A batch comes in as a [`DeclarationSet`] and
//! goes out as a [`GenerationOutput`] held in memory; nothing is produced
//! unless every stage succeeds.

use bridge_ir::{DeclarationSet, GeneratedDeclaration, QualifiedName, ScopeAccessor};
use rustc_hash::FxHashMap;

use crate::{
    build_scope_registry, generate_classes, generate_interfaces, render_model, GenConfig,
    GenProblem, GenerationOutput,
};

/// Everything generated for one batch, before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedModel {
    pub accessors: Vec<ScopeAccessor>,
    /// Supertype-first order.
    pub interfaces: Vec<GeneratedDeclaration>,
    /// Input order.
    pub classes: Vec<GeneratedDeclaration>,
}

impl GeneratedModel {
    pub fn file_count(&self) -> usize {
        self.accessors.len() + self.interfaces.len() + self.classes.len()
    }

    pub fn interface(&self, origin: &QualifiedName) -> Option<&GeneratedDeclaration> {
        self.interfaces.iter().find(|g| &g.origin == origin)
    }

    pub fn class(&self, origin: &QualifiedName) -> Option<&GeneratedDeclaration> {
        self.classes.iter().find(|g| &g.origin == origin)
    }

    /// Reject two outputs with one qualified name, or an output named like
    /// an existing declaration.
    fn check_unique(&self, set: &DeclarationSet) -> Result<(), GenProblem> {
        let outputs = self
            .accessors
            .iter()
            .map(|a| (&a.name, &a.provider))
            .chain(
                self.interfaces
                    .iter()
                    .chain(&self.classes)
                    .map(|g| (&g.name, &g.origin)),
            );

        let mut claimed: FxHashMap<&QualifiedName, &QualifiedName> = FxHashMap::default();
        for (name, origin) in outputs {
            if set.contains(name) {
                return Err(GenProblem::DuplicateOutput {
                    name: name.clone(),
                    first: name.clone(),
                    second: origin.clone(),
                });
            }
            if let Some(first) = claimed.insert(name, origin) {
                return Err(GenProblem::DuplicateOutput {
                    name: name.clone(),
                    first: first.clone(),
                    second: origin.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Run every generation stage over a batch.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = set.len()))]
pub fn generate_model(set: &DeclarationSet, config: &GenConfig) -> Result<GeneratedModel, GenProblem> {
    let registry = build_scope_registry(set, config)?;
    let interfaces = generate_interfaces(set, config)?;
    let classes = generate_classes(set, &interfaces, &registry, config)?;

    let model = GeneratedModel {
        accessors: registry.accessors().to_vec(),
        interfaces: interfaces.into_vec(),
        classes,
    };
    model.check_unique(set)?;
    Ok(model)
}

/// Generate and render a batch.
pub fn generate(set: &DeclarationSet, config: &GenConfig) -> Result<GenerationOutput, GenProblem> {
    let model = generate_model(set, config)?;
    let output = render_model(&model, config);
    tracing::debug!(
        accessors = output.accessors,
        interfaces = output.interfaces,
        classes = output.classes,
        "batch generated"
    );
    Ok(output)
}

#[cfg(test)]
mod tests;
