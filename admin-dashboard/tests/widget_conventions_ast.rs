use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 4] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs"];

#[test]
fn given_widgets_when_validating_layout_then_each_has_required_modules() {
    let mut violations: Vec<String> = Vec::new();

    for widget_dir in widget_dirs() {
        for required in REQUIRED_WIDGET_FILES {
            if !widget_dir.join(required).is_file() {
                violations.push(format!(
                    "{}: missing {required}",
                    widget_dir.display()
                ));
            }
        }
        if !widget_dir.join("view").join("mod.rs").is_file() {
            violations.push(format!(
                "{}: missing view/mod.rs",
                widget_dir.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "widget layout violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_widget_views_when_validating_conventions_then_all_modules_comply() {
    let mut violations: Vec<String> = Vec::new();

    for widget_dir in widget_dirs() {
        let view_dir = widget_dir.join("view");
        if view_dir.is_dir() {
            validate_view_dir(&view_dir, &mut violations);
        }
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn widget_dirs() -> Vec<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });

    let mut dirs: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    assert!(!dirs.is_empty(), "no widgets found in {}", widgets_dir.display());
    dirs
}

fn validate_view_dir(view_dir: &Path, violations: &mut Vec<String>) {
    let mod_rs = view_dir.join("mod.rs");
    let mod_file = parse(&mod_rs);

    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }

        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(view_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", view_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();

        if path.is_dir() {
            violations.push(format!(
                "{}: nested view directories are forbidden",
                path.display()
            ));
            continue;
        }

        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_view_file(&view_dir.join(format!("{module}.rs")), violations);
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read_source(file_path);
    let file = parse_source(file_path, &source);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in ["crate::app::", "crate::routers::", "crate::state::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in ["log::", "std::fs::", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) => {
                if item_fn.sig.ident == "view" {
                    if is_pub_crate(&item_fn.vis) {
                        view_count += 1;
                    } else {
                        violations.push(format!(
                            "{}: view must be pub(crate)",
                            file_path.display()
                        ));
                    }
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                if item_enum.ident.to_string().ends_with("Event") {
                    violations.push(format!(
                        "{}: event contracts belong in event.rs, found '{}'",
                        file_path.display(),
                        item_enum.ident
                    ));
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn parse(file_path: &Path) -> syn::File {
    parse_source(file_path, &read_source(file_path))
}

fn read_source(file_path: &Path) -> String {
    fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    })
}

fn parse_source(file_path: &Path, source: &str) -> syn::File {
    syn::parse_file(source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
