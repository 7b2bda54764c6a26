//! Kotlin source rendering.
//!
//! Each generated declaration and each scope accessor becomes one source
//! file in the package of its origin. Exact formatting is not significant;
//! the output only has to compile and satisfy override rules.

mod imports;
mod writer;

use std::collections::BTreeSet;

use bridge_ir::{
    CallTarget, DefaultScope, DelegateBody, GeneratedDeclaration, GeneratedFunction,
    GeneratedProperty, GeneratedShape, Param, QualifiedName, ScopeAccessor, TypeRef, Visibility,
};

use crate::{GenConfig, GeneratedFile, GeneratedModel, GenerationOutput};
use imports::{escape, escape_path, ImportTable};
use writer::SourceWriter;

const HEADER: &str = "// Generated by bridgegen. Do not edit.";

/// Field holding the original instance.
const WRAPPED: &str = "wrapped";
/// Field holding the optional scope provider.
const SCOPE_PROVIDER: &str = "scopeProvider";

/// Render a whole generated model: accessors, interfaces, then classes.
#[tracing::instrument(level = "debug", skip_all)]
pub fn render_model(model: &GeneratedModel, config: &GenConfig) -> GenerationOutput {
    let mut files = Vec::with_capacity(model.file_count());
    files.extend(model.accessors.iter().map(render_accessor));
    files.extend(
        model
            .interfaces
            .iter()
            .chain(&model.classes)
            .map(|d| render_declaration(d, config)),
    );
    GenerationOutput {
        files,
        accessors: model.accessors.len(),
        interfaces: model.interfaces.len(),
        classes: model.classes.len(),
    }
}

/// Render the file holding one scope accessor.
pub fn render_accessor(accessor: &ScopeAccessor) -> GeneratedFile {
    let package = accessor.name.package();
    let referenced = BTreeSet::from([accessor.provider.clone()]);
    let table = ImportTable::build(package, &accessor.name, &referenced);

    let mut w = SourceWriter::new();
    write_preamble(&mut w, package, &table);
    let provider = table.name(&accessor.provider);
    w.writeln(&format!(
        "{} val {}: {provider} = {provider}()",
        accessor.visibility.keyword(),
        escape(accessor.name.simple()),
    ));

    GeneratedFile {
        package: package.to_string(),
        name: accessor.name.simple().to_string(),
        contents: w.finish(),
    }
}

/// Render the file holding one generated interface or class.
pub fn render_declaration(decl: &GeneratedDeclaration, config: &GenConfig) -> GeneratedFile {
    let package = decl.name.package();
    let table = ImportTable::build(package, &decl.name, &referenced_names(decl, config));

    let mut w = SourceWriter::new();
    write_preamble(&mut w, package, &table);
    let mut r = Renderer {
        w,
        table: &table,
        config,
    };
    match &decl.shape {
        GeneratedShape::Interface => r.interface(decl),
        GeneratedShape::Class {
            wrapped,
            default_scope,
        } => r.class(decl, wrapped, default_scope),
    }

    GeneratedFile {
        package: package.to_string(),
        name: decl.name.simple().to_string(),
        contents: r.w.finish(),
    }
}

/// Every name the file for `decl` spells out.
fn referenced_names(decl: &GeneratedDeclaration, config: &GenConfig) -> BTreeSet<QualifiedName> {
    let mut names = BTreeSet::new();
    let mut add_type = |ty: &TypeRef| ty.walk(&mut |t: &TypeRef| {
        names.insert(t.name.clone());
    });
    for function in &decl.functions {
        function.params.iter().for_each(|p| add_type(&p.ty));
        add_type(&function.return_type);
    }
    for property in &decl.properties {
        add_type(&property.ty);
    }

    names.extend(decl.supertypes.iter().cloned());
    if let GeneratedShape::Class {
        wrapped,
        default_scope,
    } = &decl.shape
    {
        names.insert(wrapped.clone());
        names.insert(config.runtime.scope_provider());
        if let DefaultScope::Accessor(accessor) = default_scope {
            names.insert(accessor.clone());
        }
    }
    names
}

fn write_preamble(w: &mut SourceWriter, package: &str, table: &ImportTable) {
    w.writeln(HEADER);
    if !package.is_empty() {
        w.writeln(&format!("package {}", escape_path(package)));
    }
    w.newline();

    let mut any = false;
    for import in table.imports() {
        w.writeln(&format!("import {}", escape_path(&import.to_string())));
        any = true;
    }
    if any {
        w.newline();
    }
}

struct Renderer<'a> {
    w: SourceWriter,
    table: &'a ImportTable,
    config: &'a GenConfig,
}

impl Renderer<'_> {
    fn interface(&mut self, decl: &GeneratedDeclaration) {
        let header = format!(
            "{} interface {}{}",
            decl.visibility.keyword(),
            escape(decl.name.simple()),
            self.supertype_clause(&decl.supertypes),
        );
        if decl.functions.is_empty() && decl.properties.is_empty() {
            self.w.writeln(&header);
            return;
        }

        self.w.writeln(&format!("{header} {{"));
        self.w.indent();
        self.members(decl);
        self.w.dedent();
        self.w.writeln("}");
    }

    fn class(&mut self, decl: &GeneratedDeclaration, wrapped: &QualifiedName, default_scope: &DefaultScope) {
        let wrapped_ty = self.table.name(wrapped);
        let provider_ty = self.table.name(&self.config.runtime.scope_provider());

        self.w.writeln(&format!(
            "{} class {}(",
            decl.visibility.keyword(),
            escape(decl.name.simple())
        ));
        self.w.indent();
        self.w.writeln(&format!("private val {WRAPPED}: {wrapped_ty},"));
        self.w.writeln(&format!("private val {SCOPE_PROVIDER}: {provider_ty}?,"));
        self.w.dedent();
        self.w.writeln(&format!(
            "){} {{",
            self.supertype_clause(&decl.supertypes)
        ));
        self.w.indent();

        let fallback = match default_scope {
            DefaultScope::None => "null".to_string(),
            DefaultScope::Accessor(accessor) => self.table.name(accessor),
        };
        self.w.writeln(&format!(
            "public constructor({WRAPPED}: {wrapped_ty}) : this({WRAPPED}, {fallback})"
        ));
        if !decl.functions.is_empty() || !decl.properties.is_empty() {
            self.w.newline();
        }
        self.members(decl);

        self.w.dedent();
        self.w.writeln("}");
    }

    fn members(&mut self, decl: &GeneratedDeclaration) {
        for (i, property) in decl.properties.iter().enumerate() {
            if i > 0 {
                self.w.newline();
            }
            self.property(property);
        }
        if !decl.properties.is_empty() && !decl.functions.is_empty() {
            self.w.newline();
        }
        for (i, function) in decl.functions.iter().enumerate() {
            if i > 0 {
                self.w.newline();
            }
            self.function(function);
        }
    }

    fn property(&mut self, property: &GeneratedProperty) {
        let signature = format!(
            "{}val {}: {}",
            modifiers(property.visibility, property.is_override),
            escape(&property.name),
            self.table.type_ref(&property.ty),
        );
        match &property.getter {
            None => self.w.writeln(&signature),
            Some(getter) => {
                self.w.writeln(&signature);
                self.w.indent();
                let body = self.body(getter, &property.ty, &[]);
                self.w.writeln(&format!("get() = {body}"));
                self.w.dedent();
            }
        }
    }

    fn function(&mut self, function: &GeneratedFunction) {
        let params: Vec<String> = function
            .params
            .iter()
            .map(|p| format!("{}: {}", escape(&p.name), self.table.type_ref(&p.ty)))
            .collect();
        let signature = format!(
            "{}fun {}({}): {}",
            modifiers(function.visibility, function.is_override),
            escape(&function.name),
            params.join(", "),
            self.table.type_ref(&function.return_type),
        );
        match &function.body {
            None => self.w.writeln(&signature),
            Some(body) => {
                let body = self.body(body, &function.return_type, &function.params);
                self.w.writeln(&format!("{signature} = {body}"));
            }
        }
    }

    /// Expression delegating to the wrapped instance.
    fn body(&self, body: &DelegateBody, ty: &TypeRef, params: &[Param]) -> String {
        // A parameter named like a field shadows it.
        let field = |field: &str| {
            if params.iter().any(|p| p.name == field) {
                format!("this.{field}")
            } else {
                field.to_string()
            }
        };
        let wrapped = field(WRAPPED);
        let scope = field(SCOPE_PROVIDER);
        let call = match body.target() {
            CallTarget::Function { name, args } => {
                let args: Vec<_> = args.iter().map(|a| escape(a)).collect();
                format!("{wrapped}.{}({})", escape(name), args.join(", "))
            }
            CallTarget::Property { name } => format!("{wrapped}.{}", escape(name)),
        };

        match body {
            DelegateBody::Direct(_) => call,
            DelegateBody::Suspend(_) => {
                let wrapper = self.table.name(&self.config.runtime.suspend_wrapper());
                format!("{wrapper}({scope}) {{ {call} }}")
            }
            DelegateBody::Flow(_) => {
                let wrapper = self.table.name(&self.config.runtime.flow_wrapper());
                if ty.nullable {
                    format!("{call}?.let {{ {wrapper}({scope}, it) }}")
                } else {
                    format!("{wrapper}({scope}, {call})")
                }
            }
        }
    }

    fn supertype_clause(&self, supertypes: &[QualifiedName]) -> String {
        if supertypes.is_empty() {
            return String::new();
        }
        let names: Vec<String> = supertypes.iter().map(|s| self.table.name(s)).collect();
        format!(" : {}", names.join(", "))
    }
}

fn modifiers(visibility: Visibility, is_override: bool) -> String {
    let mut out = format!("{} ", visibility.keyword());
    if is_override {
        out.push_str("override ");
    }
    out
}

#[cfg(test)]
mod tests;
