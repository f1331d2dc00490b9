//! Check command report data structures.

use std::path::PathBuf;

use oasmove_core::{RelocateError, RelocationPlan};
use oasmove_manifest::Manifest;

use super::output::{Output, Report};

/// Report data from validating oasmove.toml and resolving paths.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether the config file exists (defaults are used otherwise).
    pub config_exists: bool,
    /// The manifest with directories resolved.
    pub manifest: Manifest,
    /// What a relocation would do right now.
    pub plan: Result<RelocationPlan, RelocateError>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let config = if self.config_exists {
            self.config_path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", self.config_path.display())
        };
        out.key_value("config", &config);
        out.key_value(
            "destination",
            &self.manifest.openapi.destination.display().to_string(),
        );
        out.key_value("on_failure", &self.manifest.openapi.on_failure.to_string());

        out.newline();
        out.section("Output directories");
        for dir in &self.manifest.source_set.output_dirs {
            out.list_item(&dir.display().to_string());
        }
        out.section("Resource directories");
        for dir in &self.manifest.source_set.resource_dirs {
            match dir {
                Some(dir) => out.list_item(&dir.display().to_string()),
                None => out.list_item("(unset)"),
            }
        }

        out.newline();
        match &self.plan {
            Ok(plan) => {
                out.key_value("resource root", &plan.root.display().to_string());
                out.key_value("artifact", &plan.artifact.display().to_string());
                out.key_value("target", &plan.target.display().to_string());
                out.newline();
                out.info(&format!("✓ {} is valid", self.config_path.display()));
            }
            Err(RelocateError::ArtifactMissing { .. }) => {
                out.warning("no generated openapi.json found; compile the project first");
                out.newline();
                out.info(&format!("✓ {} is valid", self.config_path.display()));
            }
            Err(err) => out.warning(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_ready() {
        let report = CheckReport {
            config_path: PathBuf::from("oasmove.toml"),
            config_exists: true,
            manifest: Manifest::default(),
            plan: Ok(RelocationPlan {
                root: PathBuf::from("src/main/resources"),
                artifact: PathBuf::from("build/classes/java/main/meta/openapi.json"),
                target: PathBuf::from("src/main/resources/public/openapi.json"),
            }),
        };

        assert!(report.plan.is_ok());
        insta::assert_snapshot!(RecordingOutput::render(&report), @r"
        config: oasmove.toml
        destination: public/openapi.json
        on_failure: warn

        Output directories:
          - build/classes/java/main
          - build/classes/kotlin/main
        Resource directories:
          - src/main/resources

        resource root: src/main/resources
        artifact: build/classes/java/main/meta/openapi.json
        target: src/main/resources/public/openapi.json

        INFO ✓ oasmove.toml is valid
        ");
    }

    #[test]
    fn test_render_without_root() {
        let mut manifest = Manifest::default();
        manifest.source_set.resource_dirs = vec![None];
        let report = CheckReport {
            config_path: PathBuf::from("oasmove.toml"),
            config_exists: false,
            manifest,
            plan: Err(RelocateError::ConfigurationMissing),
        };

        assert!(report.plan.is_err());
        let rendered = RecordingOutput::render(&report);
        assert!(rendered.contains("config: oasmove.toml (not found, using defaults)"));
        assert!(rendered.contains("  - (unset)"));
        assert!(rendered.ends_with("WARN no resource directory is configured"));
        assert!(!rendered.contains("is valid"));
    }

    #[test]
    fn test_render_missing_artifact_is_still_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("oasmove.toml"),
            config_exists: true,
            manifest: Manifest::default(),
            plan: Err(RelocateError::ArtifactMissing { searched: vec![] }),
        };

        let rendered = RecordingOutput::render(&report);
        assert!(rendered.contains("WARN no generated openapi.json found"));
        assert!(rendered.ends_with("INFO ✓ oasmove.toml is valid"));
    }
}
