//! Environment expansion for configured directories.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//! - a leading `~` - expands to `$HOME`, so a book's code checkout can live
//!   in the author's home directory

use std::borrow::Cow;

use crate::ConfigError;

fn home_dir() -> Option<String> {
    std::env::var("HOME").ok()
}

/// Expand one configured directory, or leave it unchanged.
///
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces), so paths
/// such as `code/$branch` survive untouched.
fn expand_dir<'a>(value: &'a str, field: &str) -> Result<Cow<'a, str>, ConfigError> {
    if value.contains("${") {
        shellexpand::full_with_context(value, home_dir, |var| {
            std::env::var(var).map(Some).map_err(|_| var.to_owned())
        })
        .map_err(|e| ConfigError::env_var(field, &e.cause))
    } else {
        Ok(shellexpand::tilde_with_context(value, home_dir))
    }
}

/// Expand the directory held in `slot`, if any, in place.
pub(crate) fn expand_field(slot: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    let Some(value) = slot.as_deref() else {
        return Ok(());
    };
    let expanded = match expand_dir(value, field)? {
        Cow::Borrowed(_) => return Ok(()),
        Cow::Owned(expanded) => expanded,
    };
    *slot = Some(expanded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(value: &str, field: &str) -> Result<Option<String>, ConfigError> {
        let mut slot = Some(value.to_owned());
        expand_field(&mut slot, field)?;
        Ok(slot)
    }

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PUBRX_TEST_CODE_DIR", "/srv/code");
        }
        let result = expand("${PUBRX_TEST_CODE_DIR}", "code.source_dir").unwrap();
        assert_eq!(result.as_deref(), Some("/srv/code"));
        unsafe {
            std::env::remove_var("PUBRX_TEST_CODE_DIR");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PUBRX_UNSET_VAR");
        }
        let result = expand("${PUBRX_UNSET_VAR:-../code}", "code.source_dir").unwrap();
        assert_eq!(result.as_deref(), Some("../code"));
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PUBRX_MISSING_VAR");
        }
        let err = expand("${PUBRX_MISSING_VAR}", "text.output_dir").unwrap_err();
        match &err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "text.output_dir");
                assert_eq!(message, "${PUBRX_MISSING_VAR} not set");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PUBRX_TEST_BOOK", "rails-book");
        }
        let result = expand("/src/${PUBRX_TEST_BOOK}/code", "code.source_dir").unwrap();
        assert_eq!(result.as_deref(), Some("/src/rails-book/code"));
        unsafe {
            std::env::remove_var("PUBRX_TEST_BOOK");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand("code/$branch", "code.source_dir").unwrap();
        assert_eq!(result.as_deref(), Some("code/$branch"));
    }

    #[test]
    fn test_home_prefix() {
        let Some(home) = home_dir() else {
            return;
        };
        let result = expand("~/books/rails/code", "code.source_dir").unwrap();
        assert_eq!(result, Some(format!("{home}/books/rails/code")));
    }

    #[test]
    fn test_unset_field_stays_unset() {
        let mut slot = None;
        expand_field(&mut slot, "text.source_dir").unwrap();
        assert_eq!(slot, None);
    }
}
