//! Generated declarations.
//!
//! Output of the interface and class generators, and input to the source
//! renderer. A [`GeneratedDeclaration`] remembers the original type it was
//! generated from so later stages can find it by origin.

use rustc_hash::FxHashSet;

use crate::{Param, QualifiedName, TypeRef, Visibility};

/// Structural identity of a function for override matching.
///
/// Name plus ordered parameter *names*; parameter and return types are
/// deliberately ignored because a generated supertype carries transformed
/// types while the member being matched may still carry original ones.
/// Overloads that differ only by parameter type collapse onto one key.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct SignatureKey {
    pub name: String,
    pub params: Vec<String>,
}

impl SignatureKey {
    pub fn of(name: &str, params: &[Param]) -> Self {
        SignatureKey {
            name: name.to_string(),
            params: params.iter().map(|p| p.name.clone()).collect(),
        }
    }
}

/// The target of a delegated call on the wrapped instance.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallTarget {
    /// `wrapped.name(args...)`
    Function { name: String, args: Vec<String> },
    /// `wrapped.name`
    Property { name: String },
}

/// Body of a delegating member in a generated class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DelegateBody {
    /// Returns the delegated call directly.
    Direct(CallTarget),
    /// Wraps the delegated call in a deferred closure inside a suspend wrapper.
    Suspend(CallTarget),
    /// Passes the delegated stream expression to a flow wrapper.
    Flow(CallTarget),
}

impl DelegateBody {
    pub fn target(&self) -> &CallTarget {
        match self {
            DelegateBody::Direct(t) | DelegateBody::Suspend(t) | DelegateBody::Flow(t) => t,
        }
    }
}

/// A function of a generated declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedFunction {
    pub name: String,
    pub params: Vec<Param>,
    /// Transformed return type.
    pub return_type: TypeRef,
    pub visibility: Visibility,
    pub is_override: bool,
    /// `None` for abstract interface members.
    pub body: Option<DelegateBody>,
}

impl GeneratedFunction {
    pub fn key(&self) -> SignatureKey {
        SignatureKey::of(&self.name, &self.params)
    }

    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }
}

/// A read-only property of a generated declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedProperty {
    pub name: String,
    /// Transformed property type.
    pub ty: TypeRef,
    pub visibility: Visibility,
    pub is_override: bool,
    /// `None` for abstract interface properties.
    pub getter: Option<DelegateBody>,
}

/// What a class falls back to when constructed without an explicit scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DefaultScope {
    /// Literal "no scope": subscribers must supply one.
    None,
    /// A registered scope accessor.
    Accessor(QualifiedName),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum GeneratedShape {
    Interface,
    Class {
        /// Type of the private `wrapped` field.
        wrapped: QualifiedName,
        default_scope: DefaultScope,
    },
}

/// A declaration synthesized by the generator.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedDeclaration {
    /// The original type this was generated from.
    pub origin: QualifiedName,
    /// Qualified name of the generated type.
    pub name: QualifiedName,
    pub visibility: Visibility,
    pub shape: GeneratedShape,
    /// Generated supertypes (never original ones).
    pub supertypes: Vec<QualifiedName>,
    pub functions: Vec<GeneratedFunction>,
    pub properties: Vec<GeneratedProperty>,
}

impl GeneratedDeclaration {
    /// Override keys of every function this declaration exposes.
    pub fn function_keys(&self) -> FxHashSet<SignatureKey> {
        self.functions.iter().map(GeneratedFunction::key).collect()
    }

    /// Names of every property this declaration exposes.
    pub fn property_names(&self) -> FxHashSet<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn function(&self, name: &str) -> Option<&GeneratedFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&GeneratedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A globally addressable accessor exposing a default-constructed scope
/// provider.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeAccessor {
    /// Qualified name of the accessor value.
    pub name: QualifiedName,
    /// The provider type it constructs.
    pub provider: QualifiedName,
    pub visibility: Visibility,
}
