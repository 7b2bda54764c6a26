//! Class generation.
//!
//! Each class target gets a concrete wrapper holding the original instance
//! (`wrapped`) and an optional scope provider. Every reachable member is
//! delegated to `wrapped`; suspendable and stream results are handed to the
//! runtime wrappers together with the scope provider.

use bridge_ir::{
    Asynchrony, CallTarget, DeclarationSet, DeclarationSignature, DefaultScope, DelegateBody,
    GeneratedDeclaration, GeneratedFunction, GeneratedProperty, GeneratedShape, QualifiedName,
    Visibility,
};

use crate::interface::{generated_visibility, OverrideSurface};
use crate::{collect_members, transform_member, transform_property};
use crate::{GenConfig, GenProblem, GeneratedInterfaces, ScopeRegistry};

/// Generate the wrapper class for `decl`.
///
/// The class implements the generated interface of every declared supertype
/// that has one, plus the interface generated from `decl` itself when it is
/// also an interface target. Override markers are checked against those
/// generated interfaces, never against the original supertypes.
///
/// Fails if `decl` is private or protected, or if its `launchOnScope`
/// provider is not in `registry`.
pub fn generate_class(
    decl: &DeclarationSignature,
    name: QualifiedName,
    set: &DeclarationSet,
    interfaces: &GeneratedInterfaces,
    registry: &ScopeRegistry,
    config: &GenConfig,
) -> Result<GeneratedDeclaration, GenProblem> {
    if !decl.visibility.is_reachable() {
        return Err(GenProblem::InaccessibleDeclaration {
            name: decl.name.clone(),
            visibility: decl.visibility,
        });
    }

    let default_scope = default_scope(decl, registry)?;

    let mut supertypes: Vec<&GeneratedDeclaration> = Vec::new();
    let self_interface = interfaces.get(&decl.name);
    let candidates = decl
        .supertypes
        .iter()
        .filter_map(|s| interfaces.get(s))
        .chain(self_interface);
    for generated in candidates {
        if !supertypes.iter().any(|s| s.name == generated.name) {
            supertypes.push(generated);
        }
    }
    let surface = OverrideSurface::of(supertypes.iter().copied());
    let collected = collect_members(decl, set);

    let functions = collected
        .functions
        .iter()
        .map(|member| {
            let transformed = transform_member(&decl.name, member, &config.runtime)?;
            let target = CallTarget::Function {
                name: member.name.clone(),
                args: member.params.iter().map(|p| p.name.clone()).collect(),
            };
            let is_override = surface.overrides_function(&member.key());
            Ok(GeneratedFunction {
                name: member.name.clone(),
                params: member.params.clone(),
                return_type: transformed.generated,
                visibility: member_visibility(member.visibility, is_override),
                is_override,
                body: Some(delegate(transformed.asynchrony, target)),
            })
        })
        .collect::<Result<Vec<_>, GenProblem>>()?;

    let properties = collected
        .properties
        .iter()
        .map(|property| {
            let transformed = transform_property(&decl.name, property, &config.runtime)?;
            let target = CallTarget::Property {
                name: property.name.clone(),
            };
            let is_override = surface.overrides_property(&property.name);
            Ok(GeneratedProperty {
                name: property.name.clone(),
                ty: transformed.generated,
                visibility: member_visibility(property.visibility, is_override),
                is_override,
                getter: Some(delegate(transformed.asynchrony, target)),
            })
        })
        .collect::<Result<Vec<_>, GenProblem>>()?;

    Ok(GeneratedDeclaration {
        origin: decl.name.clone(),
        name,
        visibility: generated_visibility(decl.visibility),
        shape: GeneratedShape::Class {
            wrapped: decl.name.clone(),
            default_scope,
        },
        supertypes: supertypes.iter().map(|s| s.name.clone()).collect(),
        functions,
        properties,
    })
}

/// Generate wrapper classes for every class target in the batch, in input
/// order.
#[tracing::instrument(level = "debug", skip_all, fields(interfaces = interfaces.len(), scopes = registry.len()))]
pub fn generate_classes(
    set: &DeclarationSet,
    interfaces: &GeneratedInterfaces,
    registry: &ScopeRegistry,
    config: &GenConfig,
) -> Result<Vec<GeneratedDeclaration>, GenProblem> {
    set.class_targets()
        .map(|decl| {
            let name = config.class_name(decl);
            let generated = generate_class(decl, name, set, interfaces, registry, config)?;
            tracing::debug!(
                origin = %generated.origin,
                name = %generated.name,
                supertypes = generated.supertypes.len(),
                functions = generated.functions.len(),
                "generated class"
            );
            Ok(generated)
        })
        .collect()
}

fn default_scope(
    decl: &DeclarationSignature,
    registry: &ScopeRegistry,
) -> Result<DefaultScope, GenProblem> {
    let launch_on = decl
        .annotations
        .native_class
        .as_ref()
        .and_then(|a| a.launch_on_scope.as_ref());
    let Some(provider) = launch_on else {
        return Ok(DefaultScope::None);
    };
    match registry.resolve(provider) {
        Some(accessor) => Ok(DefaultScope::Accessor(accessor.name.clone())),
        None => Err(GenProblem::UnknownScopeProvider {
            class: decl.name.clone(),
            provider: provider.clone(),
        }),
    }
}

fn delegate(asynchrony: Asynchrony, target: CallTarget) -> DelegateBody {
    match asynchrony {
        Asynchrony::Plain => DelegateBody::Direct(target),
        Asynchrony::Suspend => DelegateBody::Suspend(target),
        Asynchrony::Stream(_) => DelegateBody::Flow(target),
    }
}

/// Overrides of (public) generated interface members must stay public.
fn member_visibility(original: Visibility, is_override: bool) -> Visibility {
    if is_override {
        Visibility::Public
    } else {
        original
    }
}

#[cfg(test)]
mod tests;
