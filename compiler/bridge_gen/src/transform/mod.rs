//! Signature transformation.
//!
//! Maps the declared type of a member to the type its generated counterpart
//! exposes:
//!
//! | asynchrony | generated type                          |
//! |------------|-----------------------------------------|
//! | plain      | declared type, `Unit` when absent       |
//! | suspend    | `SuspendWrapper<T>`, `T = Unit` if absent |
//! | stream     | `FlowWrapper<E>` for element type `E`   |
//!
//! Every stream kind converges on the same wrapper; only the element type is
//! taken from the declaration.

use bridge_ir::{
    Asynchrony, MemberSignature, PropertySignature, QualifiedName, TypeRef,
};

use crate::{GenProblem, RuntimeNames};

/// A transformed member or property type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformedType {
    pub asynchrony: Asynchrony,
    /// Type exposed by the generated member.
    pub generated: TypeRef,
    /// Type of the delegated expression on the wrapped instance.
    pub source: TypeRef,
}

impl TransformedType {
    /// Whether the delegated stream may be null, so the generated body has
    /// to null-check before wrapping it.
    pub fn is_nullable_stream(&self) -> bool {
        matches!(self.asynchrony, Asynchrony::Stream(_)) && self.source.nullable
    }
}

/// Transform the return type of a function member.
pub fn transform_member(
    owner: &QualifiedName,
    member: &MemberSignature,
    runtime: &RuntimeNames,
) -> Result<TransformedType, GenProblem> {
    transform(
        owner,
        &member.name,
        member.asynchrony(),
        member.return_type.as_ref(),
        runtime,
    )
}

/// Transform the type of a property. Properties are never suspendable.
pub fn transform_property(
    owner: &QualifiedName,
    property: &PropertySignature,
    runtime: &RuntimeNames,
) -> Result<TransformedType, GenProblem> {
    transform(
        owner,
        &property.name,
        property.asynchrony(),
        Some(&property.ty),
        runtime,
    )
}

fn transform(
    owner: &QualifiedName,
    member: &str,
    asynchrony: Asynchrony,
    declared: Option<&TypeRef>,
    runtime: &RuntimeNames,
) -> Result<TransformedType, GenProblem> {
    let source = declared.cloned().unwrap_or_else(TypeRef::unit);
    let generated = match asynchrony {
        Asynchrony::Plain => source.clone(),
        Asynchrony::Suspend => TypeRef::generic(runtime.suspend_wrapper(), vec![source.clone()]),
        Asynchrony::Stream(_) => {
            let [element] = source.args.as_slice() else {
                return Err(GenProblem::MalformedStream {
                    owner: owner.clone(),
                    member: member.to_string(),
                    ty: source.to_string(),
                });
            };
            let wrapper = TypeRef::generic(runtime.flow_wrapper(), vec![element.clone()]);
            if source.nullable {
                wrapper.nullable()
            } else {
                wrapper
            }
        }
    };
    Ok(TransformedType {
        asynchrony,
        generated,
        source,
    })
}
