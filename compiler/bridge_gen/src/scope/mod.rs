//! Scope registry.
//!
//! Exported scope providers become globally addressable accessors that
//! generated classes fall back to when they are constructed without an
//! explicit scope.

use bridge_ir::{well_known, DeclarationSet, DeclarationSignature, QualifiedName, ScopeAccessor};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::interface::generated_visibility;
use crate::{collect_members, GenConfig, GenProblem, RuntimeNames};

/// Name of the property that satisfies the scope capability structurally.
const SCOPE_PROPERTY: &str = "scope";

/// Bindings from provider type to accessor, built once per batch.
#[derive(Clone, Debug, Default)]
pub struct ScopeRegistry {
    accessors: Vec<ScopeAccessor>,
    by_provider: FxHashMap<QualifiedName, usize>,
}

impl ScopeRegistry {
    /// The accessor bound to a provider type.
    pub fn resolve(&self, provider: &QualifiedName) -> Option<&ScopeAccessor> {
        self.by_provider.get(provider).map(|&i| &self.accessors[i])
    }

    /// All accessors in registration order.
    pub fn accessors(&self) -> &[ScopeAccessor] {
        &self.accessors
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// A registry extended with one more binding.
    fn with(mut self, accessor: ScopeAccessor) -> Result<Self, GenProblem> {
        if let Some(existing) = self.accessors.iter().find(|a| a.name == accessor.name) {
            return Err(GenProblem::DuplicateOutput {
                name: accessor.name.clone(),
                first: existing.provider.clone(),
                second: accessor.provider,
            });
        }
        self.by_provider
            .insert(accessor.provider.clone(), self.accessors.len());
        self.accessors.push(accessor);
        Ok(self)
    }
}

/// Register every exported scope provider in the batch.
///
/// A provider must be a reachable class (it is default-constructed by its
/// accessor) and must expose an execution scope, either by implementing the
/// runtime `ScopeProvider` or by declaring `scope: CoroutineScope`. Both may
/// be inherited from supertypes in the batch.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_scope_registry(
    set: &DeclarationSet,
    config: &GenConfig,
) -> Result<ScopeRegistry, GenProblem> {
    set.scope_providers()
        .try_fold(ScopeRegistry::default(), |registry, provider| {
            check_provider(provider, set, &config.runtime)?;
            let accessor = ScopeAccessor {
                name: config.accessor_name(&provider.name),
                provider: provider.name.clone(),
                visibility: generated_visibility(provider.visibility),
            };
            tracing::debug!(provider = %accessor.provider, accessor = %accessor.name, "scope accessor");
            registry.with(accessor)
        })
}

fn check_provider(
    provider: &DeclarationSignature,
    set: &DeclarationSet,
    runtime: &RuntimeNames,
) -> Result<(), GenProblem> {
    if !provider.visibility.is_reachable() {
        return Err(GenProblem::InaccessibleDeclaration {
            name: provider.name.clone(),
            visibility: provider.visibility,
        });
    }
    if provider.is_interface() {
        return Err(GenProblem::ProviderNotConstructible {
            provider: provider.name.clone(),
        });
    }
    if !has_scope_capability(provider, set, runtime) {
        return Err(GenProblem::MissingScopeCapability {
            provider: provider.name.clone(),
        });
    }
    Ok(())
}

fn has_scope_capability(
    provider: &DeclarationSignature,
    set: &DeclarationSet,
    runtime: &RuntimeNames,
) -> bool {
    let coroutine_scope =
        QualifiedName::new(well_known::COROUTINES_PACKAGE, well_known::COROUTINE_SCOPE);

    implements(provider, &runtime.scope_provider(), set)
        || collect_members(provider, set)
            .properties
            .iter()
            .any(|p| p.name == SCOPE_PROPERTY && p.ty.name == coroutine_scope)
}

/// Whether `decl` declares `capability` directly or through supertypes in
/// the batch.
fn implements(decl: &DeclarationSignature, capability: &QualifiedName, set: &DeclarationSet) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack = vec![decl];
    while let Some(current) = stack.pop() {
        if !visited.insert(&current.name) {
            continue;
        }
        if current.supertypes.contains(capability) {
            return true;
        }
        stack.extend(current.supertypes.iter().filter_map(|s| set.get(s)));
    }
    false
}
