//! Declarations for dependencies that ship their own prebuilt b2 project.

use std::collections::HashMap;

use crate::core::dependency::DependencyList;
use crate::util::fs::{forward_slashes, quoted_paths};

/// Quoted include paths of every dependency (`{{{deps.include_paths}}}`).
pub fn include_paths(deps: &DependencyList) -> String {
    quoted_paths(deps.include_paths())
}

/// `use-project`, `alias` and `LIBRARY_DIR` lines for the jamroot.
///
/// A lib dir qualifies when it contains `jamroot.jam`; its project short name
/// is the name of the lib dir's parent directory. Lines follow dependency
/// order. Short names declared by more than one dependency are all emitted,
/// so the last assignment wins when b2 evaluates the jamroot.
pub fn project_declarations(deps: &DependencyList) -> Vec<String> {
    let mut lines = Vec::new();
    let mut declared_by: HashMap<String, &str> = HashMap::new();

    for dep in deps {
        for lib_dir in dep.project_lib_paths() {
            let Some(project_short) = lib_dir
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };

            let lib_dir = forward_slashes(&lib_dir);
            let project = format!("\"/{},{}\"", dep.name, project_short);

            lines.push(format!("use-project {} : \"{}\" ;", project, lib_dir));
            lines.push(format!("alias \"{}\" : {} ;", project_short, project));

            for short_name in dep.short_names() {
                if let Some(previous) = declared_by.insert(short_name.clone(), &dep.name) {
                    if previous != dep.name {
                        tracing::warn!(
                            "LIBRARY_DIR({}) declared by both `{}` and `{}`; `{}` wins",
                            short_name,
                            previous,
                            dep.name,
                            dep.name
                        );
                    }
                }
                lines.push(format!(
                    "\"LIBRARY_DIR({})\" = \"{}\" ;",
                    short_name, lib_dir
                ));
            }
        }
    }

    lines
}
