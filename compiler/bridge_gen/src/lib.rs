//! Bridgegen - Wrapper Generation Pipeline
//!
//! Turns a batch of annotated declarations into callback-friendly wrapper
//! sources. Stages run in a fixed order, each consuming immutable snapshots
//! produced by the previous one:
//!
//! 1. **Scope registry** ([`build_scope_registry`]): exported scope providers
//!    become globally addressable accessors.
//! 2. **Interfaces** ([`generate_interfaces`]): interface targets are sorted
//!    supertype-first ([`topological_order`]) and each one is mirrored with
//!    transformed signatures ([`transform_member`]).
//! 3. **Classes** ([`generate_classes`]): class targets get a delegating
//!    wrapper that implements the matching generated interfaces.
//! 4. **Rendering** ([`render_model`]): every generated declaration becomes one
//!    Kotlin source file.
//!
//! The whole batch is generated in memory; [`GenerationOutput::write_to`] is
//! the only stage that touches the filesystem, and runs last.

mod class;
mod collect;
mod config;
mod interface;
mod output;
mod pipeline;
mod problem;
mod render;
mod scope;
mod sort;
mod transform;

pub use class::{generate_class, generate_classes};
pub use collect::{collect_members, collect_members_except, CollectedMembers};
pub use config::{GenConfig, RuntimeNames, DEFAULT_RUNTIME_PACKAGE};
pub use interface::{generate_interface, generate_interfaces, GeneratedInterfaces};
pub use output::{GeneratedFile, GenerationOutput};
pub use pipeline::{generate, generate_model, GeneratedModel};
pub use problem::GenProblem;
pub use render::{render_accessor, render_declaration, render_model};
pub use scope::{build_scope_registry, ScopeRegistry};
pub use sort::topological_order;
pub use transform::{transform_member, transform_property, TransformedType};
