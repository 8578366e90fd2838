use crate::core::{Dependency, DependencyKind};
use tree_sitter::Node;

pub fn extract_dependencies(node: Node, source: &str) -> Vec<Dependency> {
    let mut dependencies = Vec::new();
    visit_node_for_dependencies(node, source, &mut dependencies);
    dependencies
}

fn visit_node_for_dependencies(node: Node, source: &str, dependencies: &mut Vec<Dependency>) {
    match node.kind() {
        // `import x from "m"` and `export { x } from "m"`
        "import_statement" | "export_statement" => {
            if let Some(path) = node
                .child_by_field_name("source")
                .and_then(|s| string_literal(s, source))
            {
                dependencies.push(dependency(path, DependencyKind::Esm, node));
            }
        }
        "call_expression" => {
            if let Some(kind) = node.child_by_field_name("function").and_then(|f| {
                if f.kind() == "import" {
                    Some(DependencyKind::Dynamic)
                } else if f.utf8_text(source.as_bytes()).ok() == Some("require") {
                    Some(DependencyKind::CommonJs)
                } else {
                    None
                }
            }) {
                if let Some(path) = first_string_argument(node, source) {
                    dependencies.push(dependency(path, kind, node));
                }
            }
        }
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        visit_node_for_dependencies(child, source, dependencies);
    }
}

fn dependency(path: String, kind: DependencyKind, node: Node) -> Dependency {
    Dependency {
        path,
        kind,
        line: node.start_position().row + 1,
    }
}

fn first_string_argument(call: Node, source: &str) -> Option<String> {
    let args = call.child_by_field_name("arguments")?;
    let first = args.named_child(0)?;
    string_literal(first, source)
}

fn string_literal(node: Node, source: &str) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }
    node.utf8_text(source.as_bytes())
        .ok()
        .map(|text| text.trim_matches(|c| c == '"' || c == '\'').to_string())
}
