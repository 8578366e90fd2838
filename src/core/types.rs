//! Module-level inputs and reports

use serde::{Deserialize, Serialize};

/// One module to analyze.
///
/// The AST is owned by the caller and only borrowed during analysis.
#[derive(Debug, Clone)]
pub struct ModuleInput<A> {
    pub ast: A,
    /// Identifier used for provenance; must be non-empty.
    pub src_path: String,
    /// On-disk origin, when it differs from `src_path`.
    pub file_path: Option<String>,
    /// Package-level alias for `src_path`.
    pub src_path_alias: Option<String>,
}

impl<A> ModuleInput<A> {
    pub fn new(ast: A, src_path: impl Into<String>) -> Self {
        Self {
            ast,
            src_path: src_path.into(),
            file_path: None,
            src_path_alias: None,
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.src_path_alias = Some(alias.into());
        self
    }

    pub(crate) fn has_valid_src_path(&self) -> bool {
        !self.src_path.trim().is_empty()
    }
}

/// Source lines of code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sloc {
    pub physical: u32,
    pub logical: u32,
}

/// Module-wide complexity figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAggregate {
    pub sloc: Sloc,
    pub cyclomatic: u32,
    /// Cyclomatic complexity per 100 logical lines.
    pub cyclomatic_density: f64,
    pub cognitive: u32,
    pub max_nesting: u32,
    /// Sum of declared parameters over all functions.
    pub params: u32,
}

impl ModuleAggregate {
    pub fn density(cyclomatic: u32, logical: u32) -> f64 {
        if logical == 0 {
            0.0
        } else {
            f64::from(cyclomatic) / f64::from(logical) * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionReport {
    pub name: String,
    pub line: usize,
    pub params: u32,
    pub sloc: Sloc,
    pub cyclomatic: u32,
    pub cognitive: u32,
    pub max_nesting: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    /// `import ... from "x"`
    Esm,
    /// `require("x")`
    CommonJs,
    /// `import("x")`
    Dynamic,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub path: String,
    pub kind: DependencyKind,
    pub line: usize,
}

/// Per-module result produced by a module analyzer.
///
/// Provenance fields are empty when the analyzer returns the report and are
/// filled in by the project analyzer afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    #[serde(default)]
    pub src_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path_alias: Option<String>,
    pub aggregate: ModuleAggregate,
    #[serde(default)]
    pub functions: Vec<FunctionReport>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ModuleReport {
    pub fn new(aggregate: ModuleAggregate) -> Self {
        Self {
            aggregate,
            ..Self::default()
        }
    }

    /// Attach provenance from the module this report was produced for.
    pub fn attach_provenance<A>(&mut self, module: &ModuleInput<A>) {
        self.file_path = module.file_path.clone();
        self.src_path = module.src_path.clone();
        self.src_path_alias = module.src_path_alias.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_zero_logical_lines() {
        assert_eq!(ModuleAggregate::density(1, 0), 0.0);
        assert_eq!(ModuleAggregate::density(2, 4), 50.0);
    }

    #[test]
    fn test_src_path_validation() {
        assert!(ModuleInput::new((), "a").has_valid_src_path());
        assert!(!ModuleInput::new((), "").has_valid_src_path());
        assert!(!ModuleInput::new((), "  ").has_valid_src_path());
    }

    #[test]
    fn test_attach_provenance_overwrites_all_fields() {
        let module = ModuleInput::new((), "lib/a.js")
            .with_file_path("/abs/lib/a.js")
            .with_alias("pkg/a");
        let mut report = ModuleReport {
            src_path: "stale".into(),
            ..ModuleReport::default()
        };
        report.attach_provenance(&module);

        assert_eq!(report.src_path, "lib/a.js");
        assert_eq!(report.file_path.as_deref(), Some("/abs/lib/a.js"));
        assert_eq!(report.src_path_alias.as_deref(), Some("pkg/a"));
    }
}
