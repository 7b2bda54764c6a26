use super::*;
use bridge_ir::{CallTarget, DelegateBody};
use pretty_assertions::assert_eq;

fn q(name: &str) -> QualifiedName {
    QualifiedName::parse(name)
}

fn int() -> TypeRef {
    TypeRef::parse("kotlin.Int")
}

fn suspend_of(ty: TypeRef) -> TypeRef {
    TypeRef::generic(q("bridgegen.runtime.SuspendWrapper"), vec![ty])
}

fn flow_of(ty: TypeRef) -> TypeRef {
    TypeRef::generic(q("bridgegen.runtime.FlowWrapper"), vec![ty])
}

fn call(name: &str, args: &[&str]) -> CallTarget {
    CallTarget::Function {
        name: name.to_string(),
        args: args.iter().map(|a| (*a).to_string()).collect(),
    }
}

fn function(name: &str, params: Vec<Param>, ret: TypeRef, body: Option<DelegateBody>) -> GeneratedFunction {
    GeneratedFunction {
        name: name.to_string(),
        params,
        return_type: ret,
        visibility: Visibility::Public,
        is_override: false,
        body,
    }
}

#[test]
fn test_render_interface() {
    let decl = GeneratedDeclaration {
        origin: q("app.Service"),
        name: q("app.ServiceNativeProtocol"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Interface,
        supertypes: vec![q("app.BaseNativeProtocol")],
        functions: vec![
            GeneratedFunction {
                is_override: true,
                ..function("f", vec![Param::new("x", int())], suspend_of(TypeRef::parse("kotlin.Float")), None)
            },
            function("reset", Vec::new(), TypeRef::unit(), None),
        ],
        properties: vec![GeneratedProperty {
            name: "items".to_string(),
            ty: flow_of(TypeRef::parse("lib.model.Item")),
            visibility: Visibility::Public,
            is_override: false,
            getter: None,
        }],
    };
    let file = render_declaration(&decl, &GenConfig::default());

    assert_eq!(file.name, "ServiceNativeProtocol");
    assert_eq!(file.package, "app");
    assert_eq!(
        file.contents,
        "// Generated by bridgegen. Do not edit.
package app

import bridgegen.runtime.FlowWrapper
import bridgegen.runtime.SuspendWrapper
import lib.model.Item

public interface ServiceNativeProtocol : BaseNativeProtocol {
    public val items: FlowWrapper<Item>

    public override fun f(x: Int): SuspendWrapper<Float>

    public fun reset(): Unit
}
"
    );
}

#[test]
fn test_render_empty_interface() {
    let decl = GeneratedDeclaration {
        origin: q("Marker"),
        name: q("MarkerNativeProtocol"),
        visibility: Visibility::Internal,
        shape: GeneratedShape::Interface,
        supertypes: Vec::new(),
        functions: Vec::new(),
        properties: Vec::new(),
    };
    let file = render_declaration(&decl, &GenConfig::default());
    assert_eq!(
        file.contents,
        "// Generated by bridgegen. Do not edit.\n\ninternal interface MarkerNativeProtocol\n"
    );
}

#[test]
fn test_render_class() {
    let decl = GeneratedDeclaration {
        origin: q("app.Repo"),
        name: q("app.RepoNative"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Class {
            wrapped: q("app.Repo"),
            default_scope: DefaultScope::Accessor(q("app.di.exportedScopeProvider_mainScope")),
        },
        supertypes: vec![q("app.RepoNativeProtocol")],
        functions: vec![
            GeneratedFunction {
                is_override: true,
                ..function(
                    "load",
                    vec![Param::new("id", int())],
                    suspend_of(TypeRef::parse("kotlin.String")),
                    Some(DelegateBody::Suspend(call("load", &["id"]))),
                )
            },
            function(
                "observe",
                Vec::new(),
                flow_of(int()),
                Some(DelegateBody::Flow(call("observe", &[]))),
            ),
            GeneratedFunction {
                visibility: Visibility::Internal,
                ..function(
                    "size",
                    Vec::new(),
                    int(),
                    Some(DelegateBody::Direct(call("size", &[]))),
                )
            },
        ],
        properties: vec![GeneratedProperty {
            name: "state".to_string(),
            ty: flow_of(int()),
            visibility: Visibility::Public,
            is_override: false,
            getter: Some(DelegateBody::Flow(CallTarget::Property {
                name: "state".to_string(),
            })),
        }],
    };
    let file = render_declaration(&decl, &GenConfig::default());

    assert_eq!(
        file.contents,
        "// Generated by bridgegen. Do not edit.
package app

import app.di.exportedScopeProvider_mainScope
import bridgegen.runtime.FlowWrapper
import bridgegen.runtime.ScopeProvider
import bridgegen.runtime.SuspendWrapper

public class RepoNative(
    private val wrapped: Repo,
    private val scopeProvider: ScopeProvider?,
) : RepoNativeProtocol {
    public constructor(wrapped: Repo) : this(wrapped, exportedScopeProvider_mainScope)

    public val state: FlowWrapper<Int>
        get() = FlowWrapper(scopeProvider, wrapped.state)

    public override fun load(id: Int): SuspendWrapper<String> = SuspendWrapper(scopeProvider) { wrapped.load(id) }

    public fun observe(): FlowWrapper<Int> = FlowWrapper(scopeProvider, wrapped.observe())

    internal fun size(): Int = wrapped.size()
}
"
    );
}

#[test]
fn test_class_without_scope_passes_null() {
    let decl = GeneratedDeclaration {
        origin: q("app.Repo"),
        name: q("app.RepoNative"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Class {
            wrapped: q("app.Repo"),
            default_scope: DefaultScope::None,
        },
        supertypes: Vec::new(),
        functions: Vec::new(),
        properties: Vec::new(),
    };
    let file = render_declaration(&decl, &GenConfig::default());
    assert!(file
        .contents
        .contains("public constructor(wrapped: Repo) : this(wrapped, null)\n}"));
    assert!(file.contents.contains(") {\n"));
}

#[test]
fn test_nullable_stream_and_shadowing_param() {
    let decl = GeneratedDeclaration {
        origin: q("app.Repo"),
        name: q("app.RepoNative"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Class {
            wrapped: q("app.Repo"),
            default_scope: DefaultScope::None,
        },
        supertypes: Vec::new(),
        functions: vec![
            function(
                "maybe",
                Vec::new(),
                flow_of(int()).nullable(),
                Some(DelegateBody::Flow(call("maybe", &[]))),
            ),
            function(
                "wrap",
                vec![Param::new("wrapped", int()), Param::new("in", int())],
                int(),
                Some(DelegateBody::Direct(call("wrap", &["wrapped", "in"]))),
            ),
        ],
        properties: Vec::new(),
    };
    let contents = render_declaration(&decl, &GenConfig::default()).contents;
    assert!(contents.contains(
        "public fun maybe(): FlowWrapper<Int>? = wrapped.maybe()?.let { FlowWrapper(scopeProvider, it) }"
    ));
    assert!(contents.contains(
        "public fun wrap(wrapped: Int, `in`: Int): Int = this.wrapped.wrap(wrapped, `in`)"
    ));
}

#[test]
fn test_render_accessor() {
    let accessor = ScopeAccessor {
        name: q("app.di.exportedScopeProvider_mainScope"),
        provider: q("app.di.MainScope"),
        visibility: Visibility::Internal,
    };
    let file = render_accessor(&accessor);
    assert_eq!(file.name, "exportedScopeProvider_mainScope");
    assert_eq!(
        file.contents,
        "// Generated by bridgegen. Do not edit.
package app.di

internal val exportedScopeProvider_mainScope: MainScope = MainScope()
"
    );
}

#[test]
fn test_colliding_names_written_in_full() {
    let decl = GeneratedDeclaration {
        origin: q("app.I"),
        name: q("app.INativeProtocol"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Interface,
        supertypes: Vec::new(),
        functions: vec![function(
            "pick",
            vec![Param::new("a", TypeRef::parse("one.Item"))],
            TypeRef::parse("two.Item"),
            None,
        )],
        properties: Vec::new(),
    };
    let contents = render_declaration(&decl, &GenConfig::default()).contents;
    assert!(!contents.contains("import"));
    assert!(contents.contains("public fun pick(a: one.Item): two.Item"));
}

#[test]
fn test_render_model_orders_files() {
    let accessor = ScopeAccessor {
        name: q("app.exportedScopeProvider_s"),
        provider: q("app.S"),
        visibility: Visibility::Public,
    };
    let iface = GeneratedDeclaration {
        origin: q("app.I"),
        name: q("app.INativeProtocol"),
        visibility: Visibility::Public,
        shape: GeneratedShape::Interface,
        supertypes: Vec::new(),
        functions: Vec::new(),
        properties: Vec::new(),
    };
    let class = GeneratedDeclaration {
        origin: q("app.C"),
        name: q("app.CNative"),
        shape: GeneratedShape::Class {
            wrapped: q("app.C"),
            default_scope: DefaultScope::None,
        },
        ..iface.clone()
    };
    let model = GeneratedModel {
        accessors: vec![accessor],
        interfaces: vec![iface],
        classes: vec![class],
    };
    let output = render_model(&model, &GenConfig::default());
    let names: Vec<&str> = output.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["exportedScopeProvider_s", "INativeProtocol", "CNative"]);
    assert_eq!((output.accessors, output.interfaces, output.classes), (1, 1, 1));
}
