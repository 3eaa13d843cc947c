use srclink_core::cache::RepoCache;
use srclink_core::config::SourceLinkConfig;
use srclink_core::models::SourceLocation;
use srclink_core::providers::build_url;
use srclink_core::raw_link::rewrite_raw_url;

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;

// Create custom exception
create_exception!(srclink, SourceLinkError, PyException);

/// Converts srclink error to Python exception
fn to_py_err(err: srclink_core::error::GitError) -> PyErr {
    SourceLinkError::new_err(err.to_string())
}

/// Resolves source details for files and builds "view source" links.
#[pyclass]
struct SourceLinker {
    inner: Arc<RepoCache>,
}

#[pymethods]
impl SourceLinker {
    /// Create a linker using the process environment, optionally forcing a branch
    /// or disabling all lookups.
    ///
    /// Linkers built with the defaults share one process-wide cache; a forced
    /// branch or the disable switch gets a cache of its own.
    #[new]
    #[pyo3(signature = (disabled = false, branch = None))]
    fn new(disabled: bool, branch: Option<&str>) -> Self {
        if !disabled && branch.is_none() {
            return SourceLinker {
                inner: RepoCache::shared(),
            };
        }

        let mut config = SourceLinkConfig::global().clone();
        if disabled {
            config = config.with_disabled(true);
        }
        if let Some(branch) = branch {
            config = config.with_branch_override(branch);
        }

        SourceLinker {
            inner: Arc::new(RepoCache::new(Arc::new(config))),
        }
    }

    /// Get repository url, branch and relative path for a file, or None.
    fn file_detail<'py>(&self, py: Python<'py>, path: &str) -> PyResult<Option<&'py PyDict>> {
        let cache = Arc::clone(&self.inner);
        let owned = path.to_string();
        let detail = py
            .allow_threads(move || cache.file_detail(owned))
            .map_err(to_py_err)?;

        match detail {
            Some(detail) => {
                let result = PyDict::new(py);
                result.set_item("repo_url", detail.repo_url)?;
                result.set_item("branch", detail.branch)?;
                result.set_item("relative_path", detail.relative_path)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Build a provider link for a location, or None for unsupported hosts.
    #[pyo3(signature = (repo, branch, path, line = 0))]
    fn build_url(&self, repo: &str, branch: &str, path: &str, line: u32) -> Option<String> {
        build_url(&SourceLocation::new(repo, branch, path, line))
    }

    /// Turn a raw-content URL into its browsable page.
    fn rewrite_raw_url(&self, url: &str) -> String {
        rewrite_raw_url(self.inner.config(), url)
    }

    /// Number of directories memoized so far.
    fn cached_directories(&self) -> usize {
        self.inner.len()
    }
}

/// Python module configuration
#[pymodule]
fn srclink(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<SourceLinker>()?;
    m.add("SourceLinkError", py.get_type::<SourceLinkError>())?;

    Ok(())
}
