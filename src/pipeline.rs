//! Build pipeline for IR documents.
//!
//! ## Stages
//!
//! ```text
//! IrDocument
//!     │
//!     ▼
//! load_json ─► IrImage (arena + root)
//!     │
//!     ▼
//! build_design_units ─► one result per design unit
//!     │
//!     ▼
//! build_design ─► DesignFile (failed units left out)
//! ```
//!
//! `build_design` is a Salsa tracked function, so its result is cached until
//! the document's text or options change.
//!
//! ## Diagnostics
//!
//! Failures are reported as `Diagnostic { ... }.accumulate(db)` rather than
//! returned, so one broken unit never hides the rest of the file. Collect
//! them with [`build_with_diagnostics`].

use salsa::Accumulator;
use vhdl_ast::DesignFile;
use vhdl_front::build_design_units;
use vhdl_ir::load_json;

use crate::database::IrDocument;
use crate::diagnostic::{BuildPhase, Diagnostic, DiagnosticSeverity};

/// Result of building a document, with everything reported along the way.
#[derive(Debug)]
pub struct BuildResult<'db> {
    /// The design, or `None` when the image or its design file could not be
    /// read at all.
    pub design: Option<&'db DesignFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildResult<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Build the design of `doc`, keeping every unit that builds.
#[salsa::tracked(returns(ref))]
pub fn build_design(db: &dyn salsa::Database, doc: IrDocument) -> Option<DesignFile> {
    let image = match load_json(doc.text(db)) {
        Ok(image) => image,
        Err(error) => {
            tracing::warn!(path = %doc.path(db).display(), %error, "IR image rejected");
            Diagnostic::from(&error).accumulate(db);
            return None;
        }
    };

    let results = match build_design_units(&image.arena, image.root, doc.options(db)) {
        Ok(results) => results,
        Err(error) => {
            Diagnostic::from(&error).accumulate(db);
            return None;
        }
    };

    let mut units = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(unit) => units.push(unit),
            Err(error) => Diagnostic::from(&error).accumulate(db),
        }
    }

    if units.is_empty() {
        Diagnostic {
            message: "no design unit could be built".to_string(),
            severity: DiagnosticSeverity::Warning,
            phase: BuildPhase::Construction,
            node_kind: None,
            position: None,
        }
        .accumulate(db);
    }

    tracing::debug!(
        path = %doc.path(db).display(),
        units = units.len(),
        "built design"
    );
    Some(DesignFile { units })
}

/// Build `doc` and collect its diagnostics.
pub fn build_with_diagnostics(db: &dyn salsa::Database, doc: IrDocument) -> BuildResult<'_> {
    let design = build_design(db, doc).as_ref();
    let diagnostics = build_design::accumulated::<Diagnostic>(db, doc)
        .into_iter()
        .cloned()
        .collect();

    BuildResult {
        design,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use salsa::Setter as _;
    use vhdl_front::BuildOptions;
    use vhdl_ir::NodeKind;

    use super::*;
    use crate::database::DomDatabase;

    const ENTITY: &str = r#"{
      "root": 1,
      "nodes": [
        { "id": 1, "kind": "design_file", "fields": { "design_units": 2 } },
        { "id": 2, "kind": "design_unit", "fields": { "library_unit": 3 } },
        { "id": 3, "kind": "entity_declaration", "name": "top" }
      ]
    }"#;

    #[test]
    fn test_build_design() {
        let db = DomDatabase::default();
        let doc = IrDocument::from_text(&db, "top.json", ENTITY, BuildOptions::default());

        let result = build_with_diagnostics(&db, doc);
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
        let design = result.design.unwrap();
        assert_eq!(design.units.len(), 1);
        assert_eq!(design.units[0].unit.name(), "top");
    }

    #[test]
    fn test_rejected_image() {
        let db = DomDatabase::default();
        let doc = IrDocument::from_text(&db, "bad.json", "{ not json", BuildOptions::default());

        let result = build_with_diagnostics(&db, doc);
        assert!(result.design.is_none());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].phase, BuildPhase::Loading);
        assert!(result.has_errors());
    }

    #[test]
    fn test_non_file_root() {
        let db = DomDatabase::default();
        let text = r#"{ "root": 1, "nodes": [ { "id": 1, "kind": "simple_name", "name": "x" } ] }"#;
        let doc = IrDocument::from_text(&db, "name.json", text, BuildOptions::default());

        let result = build_with_diagnostics(&db, doc);
        assert!(result.design.is_none());
        assert_eq!(result.diagnostics[0].node_kind, Some(NodeKind::SimpleName));
    }

    #[test]
    fn test_text_change_rebuilds() {
        let mut db = DomDatabase::default();
        let doc = IrDocument::from_text(&db, "top.json", ENTITY, BuildOptions::default());
        assert_eq!(build_design(&db, doc).as_ref().unwrap().units.len(), 1);

        doc.set_text(&mut db).to(ENTITY.replace("\"top\"", "\"renamed\""));
        let design = build_design(&db, doc).as_ref().unwrap();
        assert_eq!(design.units[0].unit.name(), "renamed");
    }
}
