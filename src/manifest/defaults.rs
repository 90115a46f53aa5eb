//! Built-in verification table.
//!
//! Paths are relative to the verification root and follow the layout the
//! toolchain installer produces under `tools/`.

use std::path::PathBuf;

use super::schema::{AnalyzerSpec, LibrarySpec, Manifest, OnMissing, ToolSpec};

/// Report banner.
pub const DEFAULT_TITLE: &str = "Ledger Threat Modeling - Installation Test";

/// Interpreter used for library imports.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Definition of a built-in tool to probe for.
struct ToolDef {
    name: &'static str,
    paths: &'static [&'static str],
    on_missing: OnMissing,
    note: Option<&'static str>,
}

/// Known planner and validator definitions.
const TOOL_DEFS: &[ToolDef] = &[
    ToolDef {
        name: "FF planner",
        paths: &["tools/planners/ff/ff"],
        on_missing: OnMissing::Degrade,
        note: Some("Fast Downward will be used"),
    },
    ToolDef {
        name: "Fast Downward",
        paths: &["tools/planners/downward/fast-downward.py"],
        on_missing: OnMissing::Fail,
        note: None,
    },
    ToolDef {
        name: "VAL validator",
        paths: &[
            "tools/planners/val/validate",
            "tools/planners/val/build/validate",
            "tools/planners/val/build/Validate",
        ],
        on_missing: OnMissing::Degrade,
        note: Some("plan validation will be limited"),
    },
];

const ANALYZER_NAME: &str = "Alloy Analyzer";
const ANALYZER_PATH: &str = "tools/alloy.jar";

const LIBRARY_MODULES: &[&str] = &["networkx", "matplotlib", "yaml", "click"];

/// The complete built-in manifest.
pub fn builtin_manifest() -> Manifest {
    Manifest {
        title: DEFAULT_TITLE.to_string(),
        planners: builtin_planners(),
        analyzer: builtin_analyzer(),
        libraries: builtin_libraries(),
    }
}

/// Built-in planners and validators.
pub fn builtin_planners() -> Vec<ToolSpec> {
    TOOL_DEFS
        .iter()
        .map(|def| ToolSpec {
            name: def.name.to_string(),
            paths: def.paths.iter().map(PathBuf::from).collect(),
            on_missing: Some(def.on_missing),
            note: def.note.map(String::from),
        })
        .collect()
}

/// Built-in analyzer.
pub fn builtin_analyzer() -> AnalyzerSpec {
    AnalyzerSpec {
        name: ANALYZER_NAME.to_string(),
        path: PathBuf::from(ANALYZER_PATH),
    }
}

/// Built-in library list.
pub fn builtin_libraries() -> LibrarySpec {
    LibrarySpec {
        interpreter: PathBuf::from(DEFAULT_INTERPRETER),
        interpreter_args: Vec::new(),
        modules: LIBRARY_MODULES.iter().map(|m| m.to_string()).collect(),
    }
}
