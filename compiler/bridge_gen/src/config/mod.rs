//! Generator configuration.
//!
//! Naming conventions for generated types and the location of the runtime
//! wrapper types generated code refers to.

use bridge_ir::{DeclarationSignature, QualifiedName};

/// Default package of the runtime wrapper types.
pub const DEFAULT_RUNTIME_PACKAGE: &str = "bridgegen.runtime";

/// Names of the runtime types generated code depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeNames {
    /// Package holding all runtime types.
    pub package: String,
    /// Deferred single-result wrapper.
    pub suspend_wrapper: String,
    /// Element stream wrapper.
    pub flow_wrapper: String,
    /// Capability interface of an execution-scope owner.
    pub scope_provider: String,
}

impl Default for RuntimeNames {
    fn default() -> Self {
        RuntimeNames {
            package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            suspend_wrapper: "SuspendWrapper".to_string(),
            flow_wrapper: "FlowWrapper".to_string(),
            scope_provider: "ScopeProvider".to_string(),
        }
    }
}

impl RuntimeNames {
    /// Default runtime type names relocated to another package.
    pub fn in_package(package: impl Into<String>) -> Self {
        RuntimeNames {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn suspend_wrapper(&self) -> QualifiedName {
        QualifiedName::new(self.package.clone(), self.suspend_wrapper.clone())
    }

    pub fn flow_wrapper(&self) -> QualifiedName {
        QualifiedName::new(self.package.clone(), self.flow_wrapper.clone())
    }

    pub fn scope_provider(&self) -> QualifiedName {
        QualifiedName::new(self.package.clone(), self.scope_provider.clone())
    }
}

/// Configuration for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Appended to the original simple name when a class annotation has no
    /// explicit name.
    pub class_suffix: String,
    /// Appended to the original simple name when an interface annotation has
    /// no explicit name.
    pub interface_suffix: String,
    /// Prepended to the lower-camel provider name to form an accessor name.
    pub scope_accessor_prefix: String,
    pub runtime: RuntimeNames,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            class_suffix: "Native".to_string(),
            interface_suffix: "NativeProtocol".to_string(),
            scope_accessor_prefix: "exportedScopeProvider_".to_string(),
            runtime: RuntimeNames::default(),
        }
    }
}

impl GenConfig {
    /// Name of the class generated from `decl`.
    ///
    /// An explicit annotation name wins; otherwise the class suffix is
    /// appended. The result always lives in the original's package.
    pub fn class_name(&self, decl: &DeclarationSignature) -> QualifiedName {
        let explicit = decl
            .annotations
            .native_class
            .as_ref()
            .and_then(|a| a.name.as_deref());
        Self::derived_name(&decl.name, explicit, &self.class_suffix)
    }

    /// Name of the interface generated from `decl`.
    pub fn interface_name(&self, decl: &DeclarationSignature) -> QualifiedName {
        let explicit = decl
            .annotations
            .native_interface
            .as_ref()
            .and_then(|a| a.name.as_deref());
        Self::derived_name(&decl.name, explicit, &self.interface_suffix)
    }

    /// Name of the accessor exposing an exported scope provider.
    ///
    /// `app.MainScope` becomes `app.exportedScopeProvider_mainScope`.
    pub fn accessor_name(&self, provider: &QualifiedName) -> QualifiedName {
        let mut simple = self.scope_accessor_prefix.clone();
        let mut chars = provider.simple().chars();
        if let Some(first) = chars.next() {
            simple.extend(first.to_lowercase());
            simple.push_str(chars.as_str());
        }
        provider.sibling(simple)
    }

    fn derived_name(original: &QualifiedName, explicit: Option<&str>, suffix: &str) -> QualifiedName {
        match explicit {
            Some(name) if !name.is_empty() => original.sibling(name),
            _ => original.sibling(format!("{}{suffix}", original.simple())),
        }
    }
}
