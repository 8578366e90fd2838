use super::JavaScriptConfig;
use crate::core::{FunctionReport, ModuleAggregate, Sloc};
use tree_sitter::Node;

const STATEMENT_KINDS: &[&str] = &[
    "expression_statement",
    "variable_declaration",
    "lexical_declaration",
    "return_statement",
    "if_statement",
    "else_clause",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
    "switch_case",
    "switch_default",
    "try_statement",
    "catch_clause",
    "finally_clause",
    "throw_statement",
    "break_statement",
    "continue_statement",
    "function_declaration",
    "generator_function_declaration",
    "class_declaration",
    "import_statement",
    "export_statement",
    "labeled_statement",
    "debugger_statement",
];

fn is_function(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "function_expression"
            | "arrow_function"
            | "method_definition"
            | "generator_function_declaration"
            | "generator_function"
    )
}

pub fn module_aggregate(
    root: Node,
    source: &str,
    config: &JavaScriptConfig,
    functions: &[FunctionReport],
) -> ModuleAggregate {
    let logical = logical_lines(root, true);
    let cyclomatic = cyclomatic_complexity(root, config, true);

    ModuleAggregate {
        sloc: Sloc {
            physical: physical_lines(root, source),
            logical,
        },
        cyclomatic,
        cyclomatic_density: ModuleAggregate::density(cyclomatic, logical),
        cognitive: calculate_cognitive_complexity(root, 0),
        max_nesting: calculate_max_nesting(root, 0),
        params: functions.iter().map(|f| f.params).sum(),
    }
}

pub fn extract_functions(
    root: Node,
    source: &str,
    config: &JavaScriptConfig,
) -> Vec<FunctionReport> {
    let mut functions = Vec::new();
    visit_node_for_functions(root, source, config, &mut functions);
    functions
}

fn visit_node_for_functions(
    node: Node,
    source: &str,
    config: &JavaScriptConfig,
    functions: &mut Vec<FunctionReport>,
) {
    if node.is_named() && is_function(node.kind()) {
        functions.push(analyze_function(node, source, config));
    }

    for child in node.children(&mut node.walk()) {
        visit_node_for_functions(child, source, config, functions);
    }
}

fn analyze_function(node: Node, source: &str, config: &JavaScriptConfig) -> FunctionReport {
    FunctionReport {
        name: get_function_name(node, source),
        line: node.start_position().row + 1,
        params: count_params(node),
        sloc: Sloc {
            physical: (node.end_position().row - node.start_position().row + 1) as u32,
            logical: logical_lines(node, false),
        },
        cyclomatic: cyclomatic_complexity(node, config, false),
        cognitive: calculate_cognitive_complexity(node, 0),
        max_nesting: calculate_max_nesting(node, 0),
    }
}

fn get_function_name(node: Node, source: &str) -> String {
    if let Some(name) = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
    {
        return name.to_string();
    }

    // `const f = () => {}` and `const f = function () {}`
    if let Some(parent) = node.parent() {
        if parent.kind() == "variable_declarator" {
            if let Some(name) = parent
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            {
                return name.to_string();
            }
        }
    }

    "<anonymous>".to_string()
}

fn count_params(node: Node) -> u32 {
    if let Some(params) = node.child_by_field_name("parameters") {
        // comments are named extras
        return params
            .named_children(&mut params.walk())
            .filter(|p| p.kind() != "comment")
            .count() as u32;
    }
    // single unparenthesized arrow parameter
    if node.child_by_field_name("parameter").is_some() {
        return 1;
    }
    0
}

fn physical_lines(root: Node, source: &str) -> u32 {
    if source.trim().is_empty() {
        return 0;
    }
    let start = root.start_position();
    let end = root.end_position();
    let rows = end.row - start.row;
    // a trailing newline ends the program at column 0 of the next row
    if end.column == 0 && rows > 0 {
        rows as u32
    } else {
        rows as u32 + 1
    }
}

/// Visit every descendant of `node`, skipping bodies of nested functions
/// unless `into_functions` is set. The nested function node itself is visited.
fn visit_scope<'t>(node: Node<'t>, into_functions: bool, visit: &mut impl FnMut(Node<'t>)) {
    for child in node.children(&mut node.walk()) {
        visit(child);
        if into_functions || !is_function(child.kind()) {
            visit_scope(child, into_functions, visit);
        }
    }
}

fn logical_lines(node: Node, into_functions: bool) -> u32 {
    let mut count = 0;
    visit_scope(node, into_functions, &mut |n| {
        if STATEMENT_KINDS.contains(&n.kind()) {
            count += 1;
        }
    });
    count
}

pub fn cyclomatic_complexity(node: Node, config: &JavaScriptConfig, into_functions: bool) -> u32 {
    let mut complexity = 1; // Base complexity
    visit_scope(node, into_functions, &mut |n| complexity += branch_weight(n, config));
    complexity
}

fn branch_weight(node: Node, config: &JavaScriptConfig) -> u32 {
    let counts = match node.kind() {
        "if_statement" | "ternary_expression" => true,
        "while_statement" | "do_statement" | "for_statement" => true,
        "for_in_statement" => is_for_of(node) || config.forin,
        "switch_case" => config.switchcase,
        "catch_clause" => config.trycatch,
        "binary_expression" => config.logicalor && has_operator(node, &["&&", "||", "??"]),
        "augmented_assignment_expression" => {
            config.logicalor && has_operator(node, &["&&=", "||=", "??="])
        }
        _ => false,
    };
    u32::from(counts)
}

fn is_for_of(node: Node) -> bool {
    node.children(&mut node.walk()).any(|c| c.kind() == "of")
}

fn has_operator(node: Node, operators: &[&str]) -> bool {
    node.child_by_field_name("operator")
        .is_some_and(|op| operators.contains(&op.kind()))
}

fn calculate_cognitive_complexity(node: Node, nesting_level: u32) -> u32 {
    let mut complexity = 0;

    match node.kind() {
        // Structural complexity
        "if_statement" => {
            complexity += 1 + nesting_level;
            for child in node.children(&mut node.walk()) {
                if child.kind() == "else_clause" {
                    complexity += 1;
                }
                complexity += calculate_cognitive_complexity(child, nesting_level + 1);
            }
            return complexity;
        }
        "switch_statement" | "catch_clause" => {
            complexity += nesting_level;
            for child in node.children(&mut node.walk()) {
                complexity += calculate_cognitive_complexity(child, nesting_level + 1);
            }
            return complexity;
        }
        "while_statement" | "do_statement" | "for_statement" | "for_in_statement" => {
            complexity += 1 + nesting_level;
            for child in node.children(&mut node.walk()) {
                complexity += calculate_cognitive_complexity(child, nesting_level + 1);
            }
            return complexity;
        }
        "ternary_expression" => complexity += 1 + nesting_level,
        "binary_expression" if has_operator(node, &["&&", "||", "??"]) => complexity += 1,
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        complexity += calculate_cognitive_complexity(child, nesting_level);
    }

    complexity
}

fn calculate_max_nesting(node: Node, current_depth: u32) -> u32 {
    let new_depth = match node.kind() {
        "if_statement" | "while_statement" | "do_statement" | "for_statement"
        | "for_in_statement" | "switch_statement" | "try_statement" | "catch_clause" => {
            current_depth + 1
        }
        _ => current_depth,
    };

    node.children(&mut node.walk())
        .map(|child| calculate_max_nesting(child, new_depth))
        .fold(new_depth, u32::max)
}
