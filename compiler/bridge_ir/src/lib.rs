//! Bridgegen IR - Declaration Model Types
//!
//! This crate contains the data structures shared by every stage of the
//! wrapper generator:
//! - Qualified names and type references
//! - Normalized declaration signatures handed over by the extractor
//! - The batch (`DeclarationSet`) one generation pass works on
//! - Generated declarations produced by the interface/class generators
//!
//! # Design Philosophy
//!
//! - **Immutable after extraction**: nothing in this crate is mutated once a
//!   batch has been assembled. Generator stages build new values instead.
//! - **Typed annotation arguments**: a `launchOnScope` class reference is a
//!   plain [`QualifiedName`] field, never something recovered from a string.
//! - **Structural override keys**: [`SignatureKey`] is the explicit
//!   (name, parameter names) approximation used for override matching.

mod declaration;
mod generated;
mod name;
mod set;
mod types;

pub use declaration::{
    Annotations, ClassAnnotation, DeclarationKind, DeclarationSignature, InterfaceAnnotation,
    MemberSignature, Param, PropertySignature, Visibility,
};
pub use generated::{
    CallTarget, DefaultScope, DelegateBody, GeneratedDeclaration, GeneratedFunction,
    GeneratedProperty, GeneratedShape, ScopeAccessor, SignatureKey,
};
pub use name::QualifiedName;
pub use set::{DeclarationSet, DuplicateDeclaration};
pub use types::{well_known, Asynchrony, StreamKind, TypeRef};
