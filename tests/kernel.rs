use exopack::kernel::kernel_module;

#[test]
fn module_identity() {
    let module = kernel_module("2.1.0");
    assert_eq!(module.name, "kernel");
    assert_eq!(module.version, "2.1.0");
    assert_eq!(module.relative_maven_repo, "org/exoplatform/kernel");
    assert_eq!(module.relative_src_repo, "kernel");
}

#[test]
fn name_does_not_depend_on_version_argument() {
    assert_eq!(kernel_module("2.1.0").name, "kernel");
    assert_eq!(kernel_module("3.0.0-SNAPSHOT").name, "kernel");
}

#[test]
fn version_flows_into_kernel_projects() {
    let module = kernel_module("2.1.0");
    assert_eq!(module.commons.version, "2.1.0");
    assert_eq!(module.container.version, "2.1.0");
    assert_eq!(module.component.cache.version, "2.1.0");
    // Third-party coordinates keep their own pinned versions.
    assert_eq!(module.misc.drools.version, "2.0");
}

#[test]
fn commons_has_three_dependencies_in_declared_order() {
    let module = kernel_module("2.1.0");
    let deps = &module.commons.dependencies;
    assert_eq!(deps.len(), 3);
    assert_eq!(deps[0].artifact, "commons-lang");
    assert_eq!(deps[0].version, "2.4");
    assert_eq!(deps[1].artifact, "xpp3");
    assert_eq!(deps[1].version, "1.1.3.4.O");
    assert_eq!(deps[2].artifact, "dom4j");
    assert_eq!(deps[2].version, "1.6.1");
}

#[test]
fn container_depends_on_commons_first() {
    let module = kernel_module("2.1.0");
    let deps = &module.container.dependencies;
    assert_eq!(deps.len(), 7);
    assert_eq!(deps[0].artifact, "exo.kernel.commons");
    assert_eq!(deps[0], module.commons);
    let rest: Vec<&str> = deps[1..].iter().map(|d| d.artifact.as_str()).collect();
    assert_eq!(
        rest,
        vec![
            "picocontainer",
            "commons-beanutils",
            "jibx-run",
            "jibx-bind",
            "asm",
            "cglib"
        ]
    );
}

#[test]
fn drools_grouping() {
    let module = kernel_module("2.1.0");
    let drools = &module.misc.drools;
    assert_eq!(drools.key(), "drools:drools-core");
    assert_eq!(drools.dependencies.len(), 5);
    assert_eq!(drools.dependencies[0].artifact, "janino");
}

#[test]
fn component_projects() {
    let module = kernel_module("2.1.0");
    assert_eq!(module.component.common.dependencies.len(), 3);
    assert_eq!(module.component.command.dependencies.len(), 2);
    assert_eq!(module.component.remote.dependencies.len(), 1);
    assert_eq!(module.component.remote.dependencies[0].artifact, "jgroups");
    assert_eq!(module.component.remote.dependencies[0].version, "2.6.13.GA");
}

#[test]
fn cache_has_no_dependencies() {
    let module = kernel_module("2.1.0");
    assert!(module.component.cache.dependencies.is_empty());
}

#[test]
fn construction_is_idempotent() {
    // Same input, structurally equal trees.
    assert_eq!(kernel_module("2.1.0"), kernel_module("2.1.0"));
    assert_ne!(kernel_module("2.1.0"), kernel_module("2.2.0"));
}

#[test]
fn kernel_module_validates() {
    assert!(kernel_module("2.1.0").validate().is_ok());
}

#[test]
fn projects_in_declaration_order() {
    let module = kernel_module("2.1.0");
    let artifacts: Vec<&str> = module
        .projects()
        .iter()
        .map(|p| p.artifact.as_str())
        .collect();
    assert_eq!(
        artifacts,
        vec![
            "exo.kernel.commons",
            "exo.kernel.container",
            "drools-core",
            "exo.kernel.component.common",
            "exo.kernel.component.command",
            "exo.kernel.component.cache",
            "exo.kernel.component.remote"
        ]
    );
}
