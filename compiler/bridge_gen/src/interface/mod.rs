//! Interface generation.
//!
//! Each interface target is mirrored as an abstract interface whose members
//! expose transformed types. Targets are processed supertype-first so that
//! a generated supertype is always in the snapshot before its subtypes need
//! it.

use bridge_ir::{
    DeclarationSet, DeclarationSignature, GeneratedDeclaration, GeneratedFunction,
    GeneratedProperty, GeneratedShape, QualifiedName, SignatureKey, Visibility,
};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{collect_members_except, topological_order, transform_member, transform_property};
use crate::{GenConfig, GenProblem};

/// Generated interfaces keyed by the original type they mirror.
///
/// An immutable snapshot: [`GeneratedInterfaces::with`] consumes the current
/// snapshot and returns the extended one.
#[derive(Clone, Debug, Default)]
pub struct GeneratedInterfaces {
    declarations: Vec<GeneratedDeclaration>,
    by_origin: FxHashMap<QualifiedName, usize>,
}

impl GeneratedInterfaces {
    /// The snapshot extended with one generated interface.
    ///
    /// Generating twice for the same origin is a duplicate-generation error.
    pub fn with(mut self, generated: GeneratedDeclaration) -> Result<Self, GenProblem> {
        if let Some(&i) = self.by_origin.get(&generated.origin) {
            return Err(GenProblem::DuplicateOutput {
                name: generated.name,
                first: self.declarations[i].origin.clone(),
                second: generated.origin,
            });
        }
        self.by_origin
            .insert(generated.origin.clone(), self.declarations.len());
        self.declarations.push(generated);
        Ok(self)
    }

    /// The interface generated from `origin`.
    pub fn get(&self, origin: &QualifiedName) -> Option<&GeneratedDeclaration> {
        self.by_origin.get(origin).map(|&i| &self.declarations[i])
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Generated interfaces in generation (supertype-first) order.
    pub fn into_vec(self) -> Vec<GeneratedDeclaration> {
        self.declarations
    }
}

/// Members a generated declaration overrides when it extends `supertypes`.
pub(crate) struct OverrideSurface {
    functions: FxHashSet<SignatureKey>,
    properties: FxHashSet<String>,
}

impl OverrideSurface {
    /// Union of the members exposed by the given generated supertypes.
    pub(crate) fn of<'a>(supertypes: impl IntoIterator<Item = &'a GeneratedDeclaration>) -> Self {
        let mut surface = OverrideSurface {
            functions: FxHashSet::default(),
            properties: FxHashSet::default(),
        };
        for generated in supertypes {
            surface.functions.extend(generated.function_keys());
            surface
                .properties
                .extend(generated.property_names().into_iter().map(str::to_string));
        }
        surface
    }

    pub(crate) fn overrides_function(&self, key: &SignatureKey) -> bool {
        self.functions.contains(key)
    }

    pub(crate) fn overrides_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }
}

/// Generated declarations are public peers unless the original is internal.
pub(crate) fn generated_visibility(original: Visibility) -> Visibility {
    match original {
        Visibility::Internal => Visibility::Internal,
        Visibility::Public | Visibility::Protected | Visibility::Private => Visibility::Public,
    }
}

/// Generate the interface mirroring `decl`.
///
/// Declared supertypes with a generated counterpart in `interfaces` are
/// replaced by it and their members are inherited, not re-declared. The rest
/// are dropped and their members are flattened in through
/// [`collect_members_except`]. A member overrides when a generated
/// supertype exposes the same [`SignatureKey`] (functions) or name
/// (properties).
pub fn generate_interface(
    decl: &DeclarationSignature,
    name: QualifiedName,
    set: &DeclarationSet,
    interfaces: &GeneratedInterfaces,
    config: &GenConfig,
) -> Result<GeneratedDeclaration, GenProblem> {
    let supertypes: Vec<&GeneratedDeclaration> = decl
        .supertypes
        .iter()
        .filter_map(|s| interfaces.get(s))
        .collect();
    let surface = OverrideSurface::of(supertypes.iter().copied());
    let collected = collect_members_except(decl, set, |s| interfaces.get(s).is_some());

    let functions = collected
        .functions
        .iter()
        .map(|member| {
            let transformed = transform_member(&decl.name, member, &config.runtime)?;
            Ok(GeneratedFunction {
                name: member.name.clone(),
                params: member.params.clone(),
                return_type: transformed.generated,
                visibility: Visibility::Public,
                is_override: surface.overrides_function(&member.key()),
                body: None,
            })
        })
        .collect::<Result<Vec<_>, GenProblem>>()?;

    let properties = collected
        .properties
        .iter()
        .map(|property| {
            let transformed = transform_property(&decl.name, property, &config.runtime)?;
            Ok(GeneratedProperty {
                name: property.name.clone(),
                ty: transformed.generated,
                visibility: Visibility::Public,
                is_override: surface.overrides_property(&property.name),
                getter: None,
            })
        })
        .collect::<Result<Vec<_>, GenProblem>>()?;

    Ok(GeneratedDeclaration {
        origin: decl.name.clone(),
        name,
        visibility: generated_visibility(decl.visibility),
        shape: GeneratedShape::Interface,
        supertypes: supertypes.iter().map(|s| s.name.clone()).collect(),
        functions,
        properties,
    })
}

/// Generate interfaces for every interface target in the batch.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = set.len()))]
pub fn generate_interfaces(
    set: &DeclarationSet,
    config: &GenConfig,
) -> Result<GeneratedInterfaces, GenProblem> {
    let targets: Vec<&DeclarationSignature> = set.interface_targets().collect();
    let order = topological_order(&targets)?;

    order
        .into_iter()
        .try_fold(GeneratedInterfaces::default(), |interfaces, decl| {
            let name = config.interface_name(decl);
            let generated = generate_interface(decl, name, set, &interfaces, config)?;
            tracing::debug!(
                origin = %generated.origin,
                name = %generated.name,
                functions = generated.functions.len(),
                properties = generated.properties.len(),
                "generated interface"
            );
            interfaces.with(generated)
        })
}
