//! Normalized declaration signatures.
//!
//! These are the extractor's output: a class or interface reduced to its
//! name, modifiers, supertypes, members, properties and generator
//! annotations. The generator treats them as read-only input.

use crate::{Asynchrony, QualifiedName, SignatureKey, TypeRef};

/// Visibility modifier of a declaration or member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Whether a wrapper outside the declaration can reach it.
    ///
    /// Private and protected members cannot be called through a `wrapped`
    /// reference, so only public and internal ones are mirrored.
    pub fn is_reachable(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }

    /// Keyword as written in source.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DeclarationKind {
    Class,
    Interface,
}

/// A named, typed parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// A function member of a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberSignature {
    pub name: String,
    /// Ordered parameter list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Param>,
    /// Declared return type; `None` means the unit sentinel was inferred.
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_type: Option<TypeRef>,
    /// Carries the `suspend` modifier.
    #[cfg_attr(feature = "serde", serde(default, rename = "suspend"))]
    pub is_suspend: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
}

impl MemberSignature {
    /// A public, non-suspending member without parameters.
    pub fn new(name: impl Into<String>, return_type: Option<TypeRef>) -> Self {
        MemberSignature {
            name: name.into(),
            params: Vec::new(),
            return_type,
            is_suspend: false,
            visibility: Visibility::Public,
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    #[must_use]
    pub fn suspending(mut self) -> Self {
        self.is_suspend = true;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Classify how this member produces its result.
    ///
    /// Suspendability is checked first: a suspending member is wrapped as a
    /// deferred computation even if it also returns a stream type.
    pub fn asynchrony(&self) -> Asynchrony {
        if self.is_suspend {
            return Asynchrony::Suspend;
        }
        match self.return_type.as_ref().and_then(TypeRef::stream_kind) {
            Some(kind) => Asynchrony::Stream(kind),
            None => Asynchrony::Plain,
        }
    }

    /// Structural override key: name plus ordered parameter names.
    pub fn key(&self) -> SignatureKey {
        SignatureKey::of(&self.name, &self.params)
    }
}

/// A property member of a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySignature {
    pub name: String,
    pub ty: TypeRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
    /// Declared `var`. Mirrors are always read-only regardless.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mutable: bool,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        PropertySignature {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            mutable: false,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Properties are never suspendable: either a stream or plain.
    pub fn asynchrony(&self) -> Asynchrony {
        match self.ty.stream_kind() {
            Some(kind) => Asynchrony::Stream(kind),
            None => Asynchrony::Plain,
        }
    }
}

/// Arguments of the "generate a native interface" marker.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceAnnotation {
    /// Custom simple name for the generated interface.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

/// Arguments of the "generate a native class" marker.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassAnnotation {
    /// Custom simple name for the generated class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Exported scope provider used when no explicit scope is passed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub launch_on_scope: Option<QualifiedName>,
}

/// Generator markers attached to a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotations {
    #[cfg_attr(feature = "serde", serde(default))]
    pub native_interface: Option<InterfaceAnnotation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub native_class: Option<ClassAnnotation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exported_scope_provider: bool,
}

impl Annotations {
    /// Whether any generator marker is present.
    pub fn is_empty(&self) -> bool {
        self.native_interface.is_none()
            && self.native_class.is_none()
            && !self.exported_scope_provider
    }
}

/// Normalized view of a class or interface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationSignature {
    pub name: QualifiedName,
    pub kind: DeclarationKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
    /// Declared direct supertypes, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub supertypes: Vec<QualifiedName>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<MemberSignature>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<PropertySignature>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub annotations: Annotations,
}

impl DeclarationSignature {
    /// A public, unannotated declaration with no members.
    pub fn new(name: impl Into<QualifiedName>, kind: DeclarationKind) -> Self {
        DeclarationSignature {
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            supertypes: Vec::new(),
            members: Vec::new(),
            properties: Vec::new(),
            annotations: Annotations::default(),
        }
    }

    pub fn class(name: impl Into<QualifiedName>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    pub fn interface(name: impl Into<QualifiedName>) -> Self {
        Self::new(name, DeclarationKind::Interface)
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_supertype(mut self, supertype: impl Into<QualifiedName>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: MemberSignature) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertySignature) -> Self {
        self.properties.push(property);
        self
    }

    /// Mark for native-interface generation.
    #[must_use]
    pub fn annotate_native_interface(mut self, name: Option<&str>) -> Self {
        self.annotations.native_interface = Some(InterfaceAnnotation {
            name: name.map(str::to_string),
        });
        self
    }

    /// Mark for native-class generation.
    #[must_use]
    pub fn annotate_native_class(
        mut self,
        name: Option<&str>,
        launch_on_scope: Option<QualifiedName>,
    ) -> Self {
        self.annotations.native_class = Some(ClassAnnotation {
            name: name.map(str::to_string),
            launch_on_scope,
        });
        self
    }

    /// Mark as an exported scope provider.
    #[must_use]
    pub fn annotate_scope_provider(mut self) -> Self {
        self.annotations.exported_scope_provider = true;
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }
}
