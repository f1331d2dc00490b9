//! Checks applied to individual manifest values.

use std::path::{Component, Path};

use toml::Spanned;

use crate::{Result, error::SourceContext};

/// The destination must stay inside the resource root.
pub(super) fn destination(ctx: &SourceContext, value: &Spanned<String>) -> Result<()> {
    let reason = destination_problem(value.get_ref());
    match reason {
        None => Ok(()),
        Some(reason) => Err(ctx.validation_error_at(
            format!("invalid destination '{}'", value.get_ref()),
            format!(
                "{reason}; use a path relative to the resource directory, e.g. \"public/openapi.json\""
            ),
            value.span(),
        )),
    }
}

/// Output directories are probed as given, so an empty entry is a mistake.
pub(super) fn output_dir(ctx: &SourceContext, value: &Spanned<String>) -> Result<()> {
    if value.get_ref().trim().is_empty() {
        return Err(ctx.validation_error_at(
            "empty output directory",
            "remove the entry or name a compiled-output directory",
            value.span(),
        ));
    }
    Ok(())
}

/// Returns why `destination` cannot be used, if it cannot.
pub fn destination_problem(destination: &str) -> Option<&'static str> {
    let path = Path::new(destination);
    if destination.trim().is_empty() {
        return Some("the destination is empty");
    }
    if path.is_absolute() || path.has_root() {
        return Some("the destination is absolute");
    }
    if path
        .components()
        .any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)))
    {
        return Some("the destination leaves the resource directory");
    }
    if destination.ends_with('/') || destination.ends_with('\\') {
        return Some("the destination names a directory, not a file");
    }
    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{Error, Manifest};

    #[test]
    fn test_valid_destinations() {
        assert!(destination_problem("public/openapi.json").is_none());
        assert!(destination_problem("openapi.json").is_none());
        assert!(destination_problem("./static/openapi.yaml").is_none());
        assert!(destination_problem("a/b/c/d.json").is_none());
    }

    #[test]
    fn test_empty_destination() {
        assert!(destination_problem("").is_some());
        assert!(destination_problem("   ").is_some());
    }

    #[test]
    fn test_absolute_destination() {
        assert!(destination_problem("/etc/openapi.json").is_some());
    }

    #[test]
    fn test_escaping_destination() {
        assert!(destination_problem("../openapi.json").is_some());
        assert!(destination_problem("public/../../openapi.json").is_some());
    }

    #[test]
    fn test_directory_destination() {
        assert!(destination_problem("public/").is_some());
    }

    #[test]
    fn test_validation_error_points_at_value() {
        let src = "[openapi]\ndestination = \"../openapi.json\"\n";
        let err = Manifest::from_str(src).unwrap_err();

        match *err {
            Error::Validation { span, message, .. } => {
                let span = span.expect("span");
                let labelled = &src[span.offset()..span.offset() + span.len()];
                assert!(labelled.contains("../openapi.json"));
                assert_eq!(message, "invalid destination '../openapi.json'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let err = Manifest::from_str("[source_set]\noutput_dirs = [\"build/classes\", \"\"]\n")
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
