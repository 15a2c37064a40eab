//! The built-in kernel module manifest.

use crate::module::{ComponentProjects, MiscProjects, Module};
use crate::project::Project;

const KERNEL_GROUP: &str = "org.exoplatform.kernel";

/// Build the kernel packaging module manifest.
///
/// Pure construction with no failure path: every coordinate is a literal
/// except the module version, which is supplied by the caller and shared by
/// all `org.exoplatform.kernel` projects. Dependency declaration order is
/// preserved; downstream classpath assembly is order-sensitive.
pub fn kernel_module(version: &str) -> Module {
    let commons = Project::new(KERNEL_GROUP, "exo.kernel.commons", "jar", version)
        .depends_on(Project::new("commons-lang", "commons-lang", "jar", "2.4"))
        .depends_on(Project::new("xpp3", "xpp3", "jar", "1.1.3.4.O"))
        .depends_on(Project::new("dom4j", "dom4j", "jar", "1.6.1"));

    let container = Project::new(KERNEL_GROUP, "exo.kernel.container", "jar", version)
        .depends_on(commons.clone())
        .depends_on(Project::new("picocontainer", "picocontainer", "jar", "1.1"))
        .depends_on(Project::new("commons-beanutils", "commons-beanutils", "jar", "1.8.0"))
        .depends_on(Project::new("org.jibx", "jibx-run", "jar", "1.2.1"))
        .depends_on(Project::new("org.jibx", "jibx-bind", "jar", "1.2.1"))
        .depends_on(Project::new("asm", "asm", "jar", "1.5.3"))
        .depends_on(Project::new("cglib", "cglib", "jar", "2.2"));

    let drools = Project::new("drools", "drools-core", "jar", "2.0")
        .depends_on(Project::new("janino", "janino", "jar", "2.3.2"))
        .depends_on(Project::new("drools", "drools-base", "jar", "2.0"))
        .depends_on(Project::new("drools", "drools-io", "jar", "2.0"))
        .depends_on(Project::new("drools", "drools-java", "jar", "2.0"))
        .depends_on(Project::new("drools", "drools-smf", "jar", "2.0"));

    let common = Project::new(KERNEL_GROUP, "exo.kernel.component.common", "jar", version)
        .depends_on(Project::new("quartz", "quartz", "jar", "1.5.2"))
        .depends_on(Project::new("javax.activation", "activation", "jar", "1.1"))
        .depends_on(Project::new("javax.mail", "mail", "jar", "1.4.2"));

    let command = Project::new(KERNEL_GROUP, "exo.kernel.component.command", "jar", version)
        .depends_on(Project::new("commons-chain", "commons-chain", "jar", "1.0"))
        .depends_on(Project::new("commons-digester", "commons-digester", "jar", "1.8.1"));

    let cache = Project::new(KERNEL_GROUP, "exo.kernel.component.cache", "jar", version);

    let remote = Project::new(KERNEL_GROUP, "exo.kernel.component.remote", "jar", version)
        .depends_on(Project::new("jgroups", "jgroups", "jar", "2.6.13.GA"));

    Module {
        name: "kernel".to_string(),
        version: version.to_string(),
        relative_maven_repo: "org/exoplatform/kernel".to_string(),
        relative_src_repo: "kernel".to_string(),
        commons,
        container,
        misc: MiscProjects { drools },
        component: ComponentProjects {
            common,
            command,
            cache,
            remote,
        },
    }
}
