use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::{DashMap, Entry};
use vhdl_front::BuildOptions;

/// An IR image on disk, together with the limits it is built under.
#[salsa::input(debug)]
pub struct IrDocument {
    #[returns(ref)]
    pub path: PathBuf,
    #[returns(ref)]
    pub text: String,
    pub options: BuildOptions,
}

impl IrDocument {
    /// Create a document from in-memory text (convenience for tests).
    pub fn from_text(
        db: &dyn salsa::Database,
        path: impl AsRef<Path>,
        text: impl Into<String>,
        options: BuildOptions,
    ) -> Self {
        Self::new(db, path.as_ref().to_path_buf(), text.into(), options)
    }
}

#[salsa::db]
pub trait Db: salsa::Database {
    fn input(
        &self,
        path: PathBuf,
        options: BuildOptions,
    ) -> Result<IrDocument, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Default, Clone)]
#[salsa::db]
pub struct DomDatabase {
    storage: salsa::Storage<Self>,
    /// Loaded documents, keyed by canonical path and options. Shared by clones.
    documents: Arc<DashMap<(PathBuf, BuildOptions), IrDocument>>,
}

#[salsa::db]
impl salsa::Database for DomDatabase {}

#[salsa::db]
impl Db for DomDatabase {
    fn input(
        &self,
        path: PathBuf,
        options: BuildOptions,
    ) -> Result<IrDocument, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.canonicalize()?;
        match self.documents.entry((path.clone(), options)) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                tracing::debug!(path = %path.display(), "loading IR image");
                let text = std::fs::read_to_string(&path)?;
                let document = IrDocument::new(self, path, text, options);
                Ok(*entry.insert(document))
            }
        }
    }
}
