//! Manifest parsing from files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use oasmove_core::FailurePolicy;
use serde::Deserialize;
use toml::Spanned;

use super::{Manifest, OpenApiConfig, SourceSetConfig, validate};
use crate::{Error, Result, error::SourceContext};

/// oasmove.toml as written, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    openapi: RawOpenApi,
    #[serde(default)]
    source_set: RawSourceSet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOpenApi {
    destination: Option<Spanned<String>>,
    #[serde(default)]
    on_failure: FailurePolicy,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSourceSet {
    output_dirs: Option<Vec<Spanned<String>>>,
    resource_dirs: Option<Vec<String>>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "oasmove.toml")
    }
}

impl Manifest {
    /// Parse an oasmove.toml file from the given path.
    ///
    /// Source-set directories are left as written; see [`Manifest::rooted_at`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    lower(raw, &source_ctx)
}

/// Validate the raw manifest and fill in defaults.
fn lower(raw: RawManifest, ctx: &SourceContext) -> Result<Manifest> {
    let mut openapi = OpenApiConfig {
        on_failure: raw.openapi.on_failure,
        ..OpenApiConfig::default()
    };
    if let Some(destination) = raw.openapi.destination {
        validate::destination(ctx, &destination)?;
        openapi.destination = PathBuf::from(destination.into_inner());
    }

    let mut source_set = SourceSetConfig::default();
    if let Some(dirs) = raw.source_set.output_dirs {
        source_set.output_dirs = dirs
            .into_iter()
            .map(|dir| {
                validate::output_dir(ctx, &dir)?;
                Ok(PathBuf::from(dir.into_inner()))
            })
            .collect::<Result<_>>()?;
    }
    if let Some(dirs) = raw.source_set.resource_dirs {
        source_set.resource_dirs = dirs
            .into_iter()
            .map(|dir| (!dir.is_empty()).then(|| PathBuf::from(dir)))
            .collect();
    }

    Ok(Manifest {
        openapi,
        source_set,
    })
}
