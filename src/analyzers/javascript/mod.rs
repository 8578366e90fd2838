mod complexity;
mod dependencies;

use crate::analyzers::ModuleAnalyzer;
use crate::core::{AnalysisOptions, ModuleReport};
use crate::errors::AnalyzerError;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};
use tree_sitter::{Node, Parser, Tree};

/// A parsed JavaScript module: the tree-sitter tree plus the source it was
/// parsed from.
#[derive(Clone, Debug)]
pub struct JavaScriptAst {
    pub tree: Tree,
    pub source: String,
}

impl JavaScriptAst {
    /// Parse `source`. Syntax errors do not fail here; they are kept as error
    /// nodes in the tree and reported by the analyzer.
    pub fn parse(source: impl Into<String>) -> Result<Self, AnalyzerError> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|e| {
                AnalyzerError::internal(format!("Failed to set JavaScript language: {}", e))
            })?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| AnalyzerError::internal("Failed to parse JavaScript code"))?;
        Ok(Self { tree, source })
    }
}

/// Which constructs count as branches for cyclomatic complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaScriptConfig {
    /// `&&`, `||` and `??`
    pub logicalor: bool,
    /// `case` clauses
    pub switchcase: bool,
    /// `for (k in o)` loops
    pub forin: bool,
    /// `catch` clauses
    pub trycatch: bool,
}

impl Default for JavaScriptConfig {
    fn default() -> Self {
        Self {
            logicalor: true,
            switchcase: true,
            forin: false,
            trycatch: false,
        }
    }
}

impl JavaScriptConfig {
    /// This config with any boolean per-call overrides from `options` applied.
    pub fn overridden_by(&self, options: &AnalysisOptions) -> Self {
        Self {
            logicalor: options.get_bool("logicalor").unwrap_or(self.logicalor),
            switchcase: options.get_bool("switchcase").unwrap_or(self.switchcase),
            forin: options.get_bool("forin").unwrap_or(self.forin),
            trycatch: options.get_bool("trycatch").unwrap_or(self.trycatch),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JavaScriptModuleAnalyzer {
    config: JavaScriptConfig,
}

impl JavaScriptModuleAnalyzer {
    pub fn new(config: JavaScriptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JavaScriptConfig {
        &self.config
    }
}

impl ModuleAnalyzer for JavaScriptModuleAnalyzer {
    type Ast = JavaScriptAst;
    type Config = JavaScriptConfig;

    fn from_config(config: Self::Config) -> Self {
        Self::new(config)
    }

    fn analyze(
        &self,
        ast: &JavaScriptAst,
        options: &AnalysisOptions,
    ) -> Result<ModuleReport, AnalyzerError> {
        let _span = debug_span!("analyze_javascript_module").entered();
        let root = ast.tree.root_node();

        if root.has_error() {
            return Err(syntax_error(root));
        }

        let config = self.config.overridden_by(options);
        let functions = complexity::extract_functions(root, &ast.source, &config);
        let aggregate = complexity::module_aggregate(root, &ast.source, &config, &functions);
        let dependencies = dependencies::extract_dependencies(root, &ast.source);

        debug!(
            functions = functions.len(),
            dependencies = dependencies.len(),
            cyclomatic = aggregate.cyclomatic,
            "Analyzed JavaScript module"
        );

        Ok(ModuleReport {
            aggregate,
            functions,
            dependencies,
            ..ModuleReport::default()
        })
    }
}

fn syntax_error(root: Node) -> AnalyzerError {
    match first_error_node(root) {
        Some(node) => {
            let position = node.start_position();
            let what = if node.is_missing() {
                format!("missing `{}`", node.kind())
            } else {
                "unexpected token".to_string()
            };
            AnalyzerError::syntax(format!(
                "Syntax error at line {}, column {}: {}",
                position.row + 1,
                position.column + 1,
                what
            ))
        }
        None => AnalyzerError::syntax("Syntax error"),
    }
}

fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}
