//! Generator Problem Types
//!
//! Every fatal condition a generation pass can hit. Generation is
//! all-or-nothing, so the first problem aborts the batch and is reported
//! through [`GenProblem::into_diagnostic`].

use std::path::PathBuf;

use bridge_diagnostic::{Diagnostic, ErrorCode};
use bridge_ir::{DuplicateDeclaration, QualifiedName, Visibility};

/// Problem encountered while generating wrappers for a batch.
///
/// Variants map to error codes E1001–E1007 (configuration), E2001
/// (structure) and E3001–E3002 (input/output).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenProblem {
    // ── Configuration (E1xxx) ───────────────────────────────────────
    /// An exported scope provider exposes no execution scope.
    #[error("scope provider `{provider}` does not expose an execution scope")]
    MissingScopeCapability { provider: QualifiedName },

    /// `launchOnScope` names a type that was not exported as a provider.
    #[error("`{class}` launches on scope provider `{provider}`, which is not exported")]
    UnknownScopeProvider {
        class: QualifiedName,
        provider: QualifiedName,
    },

    /// A stream-typed member has no single element type argument.
    #[error("`{owner}.{member}` returns stream type `{ty}` without a single element type")]
    MalformedStream {
        owner: QualifiedName,
        member: String,
        ty: String,
    },

    /// A private or protected declaration was marked for wrapping.
    #[error("{} declaration `{name}` cannot be wrapped", .visibility.keyword())]
    InaccessibleDeclaration {
        name: QualifiedName,
        visibility: Visibility,
    },

    /// An exported scope provider cannot be default-constructed.
    #[error("scope provider `{provider}` is not a class and cannot be constructed")]
    ProviderNotConstructible { provider: QualifiedName },

    /// Two outputs claim the same qualified name.
    #[error("`{name}` would be generated twice (from `{first}` and `{second}`)")]
    DuplicateOutput {
        name: QualifiedName,
        first: QualifiedName,
        second: QualifiedName,
    },

    /// The batch lists the same declaration more than once.
    #[error("declaration `{name}` appears more than once in the batch")]
    DuplicateDeclaration { name: QualifiedName },

    // ── Structure (E2xxx) ───────────────────────────────────────────
    /// Annotated interfaces inherit from each other in a cycle.
    #[error("inheritance cycle detected among {}", join_names(.members))]
    InheritanceCycle { members: Vec<QualifiedName> },

    // ── Input/Output (E3xxx) ────────────────────────────────────────
    /// A generated file could not be written.
    #[error("failed to write `{}`: {message}", .path.display())]
    OutputWrite { path: PathBuf, message: String },

    /// The declaration model could not be loaded.
    #[error("failed to load declaration model `{}`: {message}", .path.display())]
    ModelLoad { path: PathBuf, message: String },
}

fn join_names(names: &[QualifiedName]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<DuplicateDeclaration> for GenProblem {
    fn from(dup: DuplicateDeclaration) -> Self {
        GenProblem::DuplicateDeclaration { name: dup.name }
    }
}

impl GenProblem {
    /// The error code this problem is reported under.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingScopeCapability { .. } => ErrorCode::E1001,
            Self::UnknownScopeProvider { .. } => ErrorCode::E1002,
            Self::MalformedStream { .. } => ErrorCode::E1003,
            Self::InaccessibleDeclaration { .. } => ErrorCode::E1004,
            Self::ProviderNotConstructible { .. } => ErrorCode::E1005,
            Self::DuplicateOutput { .. } => ErrorCode::E1006,
            Self::DuplicateDeclaration { .. } => ErrorCode::E1007,
            Self::InheritanceCycle { .. } => ErrorCode::E2001,
            Self::OutputWrite { .. } => ErrorCode::E3001,
            Self::ModelLoad { .. } => ErrorCode::E3002,
        }
    }

    /// Convert this problem into a [`Diagnostic`].
    #[cold]
    pub fn into_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            Self::MissingScopeCapability { provider } => diag
                .with_label(provider.to_string(), "exported as a scope provider here")
                .with_note("a scope provider must implement `ScopeProvider` or declare `val scope: CoroutineScope`"),

            Self::UnknownScopeProvider { class, provider } => diag
                .with_label(class.to_string(), "`launchOnScope` declared here")
                .with_secondary_label(provider.to_string(), "not exported as a scope provider")
                .with_suggestion(format!(
                    "export `{provider}` as a scope provider, or drop `launchOnScope`"
                )),

            Self::MalformedStream { owner, member, .. } => diag
                .with_label(format!("{owner}.{member}"), "stream type declared here")
                .with_note("stream wrappers need the element type to expose to callers")
                .with_suggestion("declare the element type, e.g. `Flow<Item>`"),

            Self::InaccessibleDeclaration { name, .. } => diag
                .with_label(name.to_string(), "marked for wrapping here")
                .with_note("generated wrappers are public peers of the original declaration")
                .with_suggestion("make the declaration `public` or `internal`"),

            Self::ProviderNotConstructible { provider } => diag
                .with_label(provider.to_string(), "exported as a scope provider here")
                .with_note("the generated accessor default-constructs the provider"),

            Self::DuplicateOutput {
                name,
                first,
                second,
            } => diag
                .with_label(second.to_string(), format!("generates `{name}`"))
                .with_secondary_label(first.to_string(), "first generated here")
                .with_suggestion("give one of the generated types an explicit name"),

            Self::DuplicateDeclaration { name } => diag
                .with_label(name.to_string(), "listed more than once")
                .with_note("the declaration model must list every declaration exactly once"),

            Self::InheritanceCycle { members } => {
                let diag = members.iter().fold(diag, |d, member| {
                    d.with_secondary_label(member.to_string(), "part of the cycle")
                });
                diag.with_note("no files were generated for this batch")
            }

            Self::OutputWrite { .. } => diag
                .with_note("files written before the failure are incomplete and must not be compiled")
                .with_suggestion("check that the output directory exists and is writable"),

            Self::ModelLoad { .. } => {
                diag.with_suggestion("pass the JSON declaration model produced by the extractor")
            }
        }
    }
}
