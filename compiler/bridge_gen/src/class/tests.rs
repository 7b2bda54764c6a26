use super::*;
use bridge_ir::{MemberSignature, PropertySignature, StreamKind, TypeRef};
use pretty_assertions::assert_eq;

use crate::{build_scope_registry, generate_interfaces};

fn int() -> TypeRef {
    TypeRef::parse("kotlin.Int")
}

fn float() -> TypeRef {
    TypeRef::parse("kotlin.Float")
}

fn flow_of(element: TypeRef) -> TypeRef {
    TypeRef::generic(StreamKind::Flow.qualified_name(), vec![element])
}

fn q(name: &str) -> QualifiedName {
    QualifiedName::parse(name)
}

fn scope_provider(name: &str) -> DeclarationSignature {
    DeclarationSignature::class(name)
        .with_supertype("bridgegen.runtime.ScopeProvider")
        .annotate_scope_provider()
}

fn run(decls: Vec<DeclarationSignature>) -> Result<Vec<GeneratedDeclaration>, GenProblem> {
    let config = GenConfig::default();
    let set = DeclarationSet::new(decls)?;
    let registry = build_scope_registry(&set, &config)?;
    let interfaces = generate_interfaces(&set, &config)?;
    generate_classes(&set, &interfaces, &registry, &config)
}

fn only(result: Result<Vec<GeneratedDeclaration>, GenProblem>) -> Option<GeneratedDeclaration> {
    result.ok().and_then(|v| v.into_iter().next())
}

fn call(name: &str, args: &[&str]) -> CallTarget {
    CallTarget::Function {
        name: name.to_string(),
        args: args.iter().map(|a| (*a).to_string()).collect(),
    }
}

#[test]
fn test_stream_member_wrapped_in_flow() {
    // class C { fun f(x: Int): Flow<Float> }
    let decl = DeclarationSignature::class("app.C")
        .with_member(MemberSignature::new("f", Some(flow_of(float()))).with_param("x", int()))
        .annotate_native_class(None, None);
    let generated = only(run(vec![decl]));

    assert_eq!(generated.as_ref().map(|g| g.name.to_string()), Some("app.CNative".to_string()));
    let f = generated.as_ref().and_then(|g| g.function("f"));
    assert_eq!(
        f.map(|f| f.return_type.to_string()),
        Some("bridgegen.runtime.FlowWrapper<kotlin.Float>".to_string())
    );
    assert_eq!(f.and_then(|f| f.body.clone()), Some(DelegateBody::Flow(call("f", &["x"]))));
}

#[test]
fn test_bodies_follow_asynchrony() {
    let decl = DeclarationSignature::class("app.C")
        .with_member(MemberSignature::new("plain", Some(int())).with_param("a", int()).with_param("b", int()))
        .with_member(MemberSignature::new("later", None).suspending())
        .with_property(PropertySignature::new("count", int()))
        .with_property(PropertySignature::new("updates", flow_of(int())))
        .annotate_native_class(None, None);
    let generated = only(run(vec![decl]));
    let body = |name: &str| {
        generated
            .as_ref()
            .and_then(|g| g.function(name))
            .and_then(|f| f.body.clone())
    };
    let getter = |name: &str| {
        generated
            .as_ref()
            .and_then(|g| g.property(name))
            .and_then(|p| p.getter.clone())
    };

    assert_eq!(body("plain"), Some(DelegateBody::Direct(call("plain", &["a", "b"]))));
    assert_eq!(body("later"), Some(DelegateBody::Suspend(call("later", &[]))));
    assert_eq!(
        getter("count"),
        Some(DelegateBody::Direct(CallTarget::Property { name: "count".to_string() }))
    );
    assert_eq!(
        getter("updates"),
        Some(DelegateBody::Flow(CallTarget::Property { name: "updates".to_string() }))
    );
    assert_eq!(
        generated
            .as_ref()
            .and_then(|g| g.function("later"))
            .map(|f| f.return_type.to_string()),
        Some("bridgegen.runtime.SuspendWrapper<kotlin.Unit>".to_string())
    );
}

#[test]
fn test_shape_records_wrapped_and_no_scope() {
    let decl = DeclarationSignature::class("app.C").annotate_native_class(Some("Wrapper"), None);
    let generated = only(run(vec![decl]));
    assert_eq!(generated.as_ref().map(|g| g.name.to_string()), Some("app.Wrapper".to_string()));
    assert_eq!(
        generated.map(|g| g.shape),
        Some(GeneratedShape::Class {
            wrapped: q("app.C"),
            default_scope: DefaultScope::None,
        })
    );
}

#[test]
fn test_launch_on_registered_scope() {
    let decl = DeclarationSignature::class("app.C").annotate_native_class(None, Some(q("app.di.MainScope")));
    let generated = only(run(vec![scope_provider("app.di.MainScope"), decl]));
    assert_eq!(
        generated.map(|g| g.shape),
        Some(GeneratedShape::Class {
            wrapped: q("app.C"),
            default_scope: DefaultScope::Accessor(q("app.di.exportedScopeProvider_mainScope")),
        })
    );
}

#[test]
fn test_launch_on_unknown_scope_fails() {
    // P exists but was never exported
    let provider = DeclarationSignature::class("app.P").with_supertype("bridgegen.runtime.ScopeProvider");
    let decl = DeclarationSignature::class("app.C").annotate_native_class(None, Some(q("app.P")));
    assert_eq!(
        run(vec![provider, decl]),
        Err(GenProblem::UnknownScopeProvider {
            class: q("app.C"),
            provider: q("app.P"),
        })
    );
}

#[test]
fn test_private_and_protected_rejected() {
    for visibility in [Visibility::Private, Visibility::Protected] {
        let decl = DeclarationSignature::class("app.Hidden")
            .with_visibility(visibility)
            .annotate_native_class(None, None);
        assert_eq!(
            run(vec![decl]),
            Err(GenProblem::InaccessibleDeclaration {
                name: q("app.Hidden"),
                visibility,
            })
        );
    }
}

#[test]
fn test_implements_generated_supertype_with_overrides() {
    let iface = DeclarationSignature::interface("app.I")
        .with_member(MemberSignature::new("a", Some(int())))
        .with_member(MemberSignature::new("b", None).suspending())
        .annotate_native_interface(None);
    let class = DeclarationSignature::class("app.Impl")
        .with_supertype("app.I")
        .with_supertype("lib.Closeable")
        .with_member(MemberSignature::new("a", Some(int())))
        .with_member(MemberSignature::new("b", None).suspending())
        .with_member(MemberSignature::new("extra", None).with_visibility(Visibility::Internal))
        .annotate_native_class(None, None);
    let generated = only(run(vec![iface, class]));

    assert_eq!(
        generated.as_ref().map(|g| g.supertypes.clone()),
        Some(vec![q("app.INativeProtocol")])
    );
    let flags: Vec<(String, bool, Visibility)> = generated
        .map(|g| {
            g.functions
                .iter()
                .map(|f| (f.name.clone(), f.is_override, f.visibility))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        flags,
        vec![
            ("a".to_string(), true, Visibility::Public),
            ("b".to_string(), true, Visibility::Public),
            ("extra".to_string(), false, Visibility::Internal),
        ]
    );
}

#[test]
fn test_unannotated_supertype_not_implemented() {
    let iface = DeclarationSignature::interface("app.Plain").with_member(MemberSignature::new("a", None));
    let class = DeclarationSignature::class("app.Impl")
        .with_supertype("app.Plain")
        .annotate_native_class(None, None);
    let generated = only(run(vec![iface, class]));
    assert_eq!(generated.as_ref().map(|g| g.supertypes.is_empty()), Some(true));
    // inherited member still delegated, without override
    assert_eq!(
        generated
            .as_ref()
            .and_then(|g| g.function("a"))
            .map(|f| f.is_override),
        Some(false)
    );
}

#[test]
fn test_self_interface() {
    let decl = DeclarationSignature::class("app.Store")
        .with_member(MemberSignature::new("load", Some(int())).suspending())
        .annotate_native_interface(None)
        .annotate_native_class(None, None);
    let generated = only(run(vec![decl]));
    assert_eq!(
        generated.as_ref().map(|g| g.supertypes.clone()),
        Some(vec![q("app.StoreNativeProtocol")])
    );
    assert_eq!(
        generated.and_then(|g| g.function("load").map(|f| f.is_override)),
        Some(true)
    );
}

#[test]
fn test_classes_in_input_order() {
    let result = run(vec![
        DeclarationSignature::class("app.B").annotate_native_class(None, None),
        DeclarationSignature::class("app.Skip"),
        DeclarationSignature::class("app.A").annotate_native_class(None, None),
    ]);
    let origins: Vec<String> = result
        .unwrap_or_default()
        .iter()
        .map(|g| g.origin.to_string())
        .collect();
    assert_eq!(origins, vec!["app.B".to_string(), "app.A".to_string()]);
}
