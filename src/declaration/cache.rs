//! Per-package declaration lookup, populated on first use.
use super::error::DeclarationError;
use super::node::FunctionType;
use super::provider::CallSignature;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Function name -> declared signature, for one package.
pub type PackageDeclarations = HashMap<String, Arc<FunctionType>>;

/// Where a package's declarations come from.
pub trait DeclarationSource {
    fn load_package(&self, package: &str) -> Result<PackageDeclarations, DeclarationError>;
}

/// Reads `<dir>/<package>.<extension>`, a JSON object mapping function names
/// to declared signatures.
#[derive(Debug, Clone)]
pub struct JsonDeclarationSource {
    dir: PathBuf,
    extension: String,
}

impl JsonDeclarationSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(dir, "json")
    }

    pub fn with_extension(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self { dir: dir.into(), extension: extension.to_string() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn package_path(&self, package: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", package, self.extension))
    }
}

impl DeclarationSource for JsonDeclarationSource {
    fn load_package(&self, package: &str) -> Result<PackageDeclarations, DeclarationError> {
        let path = self.package_path(package);
        let text = std::fs::read_to_string(&path).map_err(|source| DeclarationError::Io {
            package: package.to_string(),
            path: path.clone(),
            source,
        })?;
        let parsed: BTreeMap<String, FunctionType> =
            serde_json::from_str(&text).map_err(|source| DeclarationError::Parse {
                package: package.to_string(),
                source,
            })?;
        Ok(parsed.into_iter().map(|(name, f)| (name, Arc::new(f))).collect())
    }
}

/// Caches declarations per package. A package is loaded the first time any of
/// its functions is looked up; a package that fails to load is remembered as
/// unusable and never retried.
pub struct DeclarationCache<S: DeclarationSource> {
    source: S,
    // `None` marks a package whose declarations could not be loaded.
    packages: Mutex<HashMap<String, Option<Arc<PackageDeclarations>>>>,
}

impl<S: DeclarationSource> DeclarationCache<S> {
    pub fn new(source: S) -> Self {
        Self { source, packages: Mutex::new(HashMap::new()) }
    }

    /// The declared type of `package::function`, if one exists and is usable.
    pub fn function_type(&self, package: &str, function: &str) -> Option<Arc<FunctionType>> {
        self.package(package)?.get(function).cloned()
    }

    /// Builds the signature provider for one call to `package::function`.
    pub fn signature(&self, package: &str, function: &str, formals: Vec<String>) -> CallSignature {
        CallSignature::new(self.function_type(package, function), formals)
    }

    /// Number of packages looked up so far, including unusable ones.
    pub fn loaded_packages(&self) -> usize {
        self.lock().len()
    }

    fn package(&self, package: &str) -> Option<Arc<PackageDeclarations>> {
        let mut packages = self.lock();
        if let Some(entry) = packages.get(package) {
            return entry.clone();
        }

        let entry = match self.source.load_package(package) {
            Ok(decls) => {
                debug!(package, functions = decls.len(), "loaded type declarations");
                Some(Arc::new(decls))
            }
            Err(err) => {
                warn!(package, error = %err, "type declarations unusable");
                None
            }
        };
        packages.insert(package.to_string(), entry.clone());
        entry
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Option<Arc<PackageDeclarations>>>> {
        self.packages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
