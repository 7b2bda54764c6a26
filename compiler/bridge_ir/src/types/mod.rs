//! Type references and asynchrony classification.
//!
//! A [`TypeRef`] is the normalized form of a type as it appears in a member
//! signature: a raw qualified name, its ordered generic arguments and a
//! nullability flag. Stream-producing types are recognized by their raw name
//! through [`StreamKind::from_raw`].

use std::fmt;

use crate::QualifiedName;

/// Names of host-language types the generator needs to recognize or emit.
pub mod well_known {
    /// Package of the coroutine stream types.
    pub const FLOW_PACKAGE: &str = "kotlinx.coroutines.flow";
    /// Package of the coroutine scope type.
    pub const COROUTINES_PACKAGE: &str = "kotlinx.coroutines";
    /// Simple name of the execution-scope type.
    pub const COROUTINE_SCOPE: &str = "CoroutineScope";
    /// Package of implicitly imported language types.
    pub const KOTLIN_PACKAGE: &str = "kotlin";
    /// Simple name of the unit sentinel.
    pub const UNIT: &str = "Unit";
}

/// A reference to a (possibly generic, possibly nullable) type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    /// Raw (unparameterized) type name.
    pub name: QualifiedName,
    /// Ordered generic arguments.
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<TypeRef>,
    /// Whether the type is nullable (`T?`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,
}

impl TypeRef {
    /// A non-generic, non-nullable type.
    pub fn named(name: QualifiedName) -> Self {
        TypeRef {
            name,
            args: Vec::new(),
            nullable: false,
        }
    }

    /// A non-nullable generic instantiation.
    pub fn generic(name: QualifiedName, args: Vec<TypeRef>) -> Self {
        TypeRef {
            name,
            args,
            nullable: false,
        }
    }

    /// Parse shorthand for a non-generic type: `"kotlin.Int"`.
    pub fn parse(dotted: &str) -> Self {
        Self::named(QualifiedName::parse(dotted))
    }

    /// The unit sentinel substituted for absent return types.
    pub fn unit() -> Self {
        Self::named(QualifiedName::new(
            well_known::KOTLIN_PACKAGE,
            well_known::UNIT,
        ))
    }

    /// Mark this type nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The stream kind of this type's raw constructor, if it is one.
    pub fn stream_kind(&self) -> Option<StreamKind> {
        StreamKind::from_raw(&self.name)
    }

    /// Visit this type and every nested generic argument, outermost first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a TypeRef)) {
        visit(self);
        for arg in &self.args {
            arg.walk(visit);
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// The recognized stream-like type constructors.
///
/// Cold (`Flow`) and hot/stateful (`SharedFlow`, `StateFlow` and their
/// mutable variants) streams all map to the same generated wrapper; they
/// differ only in how the element type is pulled out of the declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StreamKind {
    Flow,
    SharedFlow,
    StateFlow,
    MutableSharedFlow,
    MutableStateFlow,
}

impl StreamKind {
    /// All recognized stream kinds.
    pub const ALL: &[StreamKind] = &[
        StreamKind::Flow,
        StreamKind::SharedFlow,
        StreamKind::StateFlow,
        StreamKind::MutableSharedFlow,
        StreamKind::MutableStateFlow,
    ];

    /// Simple name of the type constructor in [`well_known::FLOW_PACKAGE`].
    pub fn simple_name(self) -> &'static str {
        match self {
            StreamKind::Flow => "Flow",
            StreamKind::SharedFlow => "SharedFlow",
            StreamKind::StateFlow => "StateFlow",
            StreamKind::MutableSharedFlow => "MutableSharedFlow",
            StreamKind::MutableStateFlow => "MutableStateFlow",
        }
    }

    /// Fully qualified name of the type constructor.
    pub fn qualified_name(self) -> QualifiedName {
        QualifiedName::new(well_known::FLOW_PACKAGE, self.simple_name())
    }

    /// Recognize a raw type name as a stream constructor.
    pub fn from_raw(name: &QualifiedName) -> Option<Self> {
        if !name.is_in_package(well_known::FLOW_PACKAGE) {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.simple_name() == name.simple())
    }
}

/// How a member produces its result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Asynchrony {
    /// Returns its value directly.
    Plain,
    /// A suspendable call producing a single deferred result.
    Suspend,
    /// Produces a stream of asynchronously emitted elements.
    Stream(StreamKind),
}
