//! The process-wide catalog.
//!
//! The global catalog is initialized at most once and is read-only
//! afterwards. Applications that need custom components call [`install`]
//! during startup; everything else falls back to the built-in catalog on
//! first use.

use once_cell::sync::OnceCell;
use tracing::debug;

use super::builtin;
use super::registry::{Catalog, CatalogError};
use crate::variant::Selection;

static GLOBAL: OnceCell<Catalog> = OnceCell::new();

/// Installs the process-wide catalog.
///
/// # Errors
///
/// Returns [`CatalogError::AlreadyInstalled`] if a catalog was installed
/// before, or if [`global`] already fell back to the built-in catalog.
///
/// # Example
///
/// ```rust
/// let mut catalog = stylebook::builtin::catalog();
/// catalog.merge(stylebook::parse_stylesheet("badge:\n  base: rounded-full\n").unwrap());
/// stylebook::install(catalog).unwrap();
///
/// assert_eq!(stylebook::global().get("badge").unwrap().base(), ["rounded-full"]);
/// ```
pub fn install(catalog: Catalog) -> Result<(), CatalogError> {
    let count = catalog.len();
    GLOBAL
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInstalled)?;
    debug!(components = count, "installed global catalog");
    Ok(())
}

/// Returns the process-wide catalog, initializing it with the built-in
/// catalog if nothing was installed.
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(|| {
        debug!("initializing global catalog from built-ins");
        builtin::catalog()
    })
}

/// Resolves a selection against a component of the process-wide catalog.
pub fn resolve(name: &str, selection: &Selection) -> Result<Vec<String>, CatalogError> {
    global().resolve(name, selection)
}

/// Resolves a selection against the process-wide catalog into a `class` value.
pub fn resolve_class(name: &str, selection: &Selection) -> Result<String, CatalogError> {
    global().resolve_class(name, selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_falls_back_to_builtins() {
        let catalog = global();
        assert!(catalog.contains("button"));
        assert!(catalog.contains("field"));
    }

    #[test]
    fn test_install_after_use_fails() {
        let _ = global();
        assert_eq!(install(Catalog::new()), Err(CatalogError::AlreadyInstalled));
    }

    #[test]
    fn test_global_resolve_class() {
        let class = resolve_class("separator", &Selection::new().set("orientation", "vertical"))
            .unwrap();
        assert!(class.ends_with("h-full w-px"));
    }

    #[test]
    fn test_global_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    resolve("button", &Selection::new().set("size", "lg")).unwrap()
                })
            })
            .collect();

        let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
