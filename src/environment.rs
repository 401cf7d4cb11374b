use anyhow::{Context, Result};
use std::env;

/// Retrieves an environment variable, falling back to `default` when it is unset or blank.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `default`: The value used when the variable is missing.
///
/// # Returns
/// - `String`
pub fn get_env_var_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Retrieves an environment variable and parses it as an unsigned integer.
///
/// Returns `Ok(None)` when the variable is unset or blank, and an error when it is
/// set to something that is not a valid `u64`.
pub fn get_env_var_as_u64(var: &str) -> Result<Option<u64>> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", var, value)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var_or_default() {
        assert_eq!(
            get_env_var_or("GBIF_SPECIES_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_get_env_var_or_trims() {
        env::set_var("GBIF_SPECIES_TEST_TRIMMED", "  value  ");
        assert_eq!(get_env_var_or("GBIF_SPECIES_TEST_TRIMMED", "x"), "value");

        env::set_var("GBIF_SPECIES_TEST_BLANK", "   ");
        assert_eq!(get_env_var_or("GBIF_SPECIES_TEST_BLANK", "x"), "x");
    }

    #[test]
    fn test_get_env_var_as_u64() {
        assert_eq!(get_env_var_as_u64("GBIF_SPECIES_TEST_U64_UNSET").unwrap(), None);

        env::set_var("GBIF_SPECIES_TEST_U64_OK", "500");
        assert_eq!(get_env_var_as_u64("GBIF_SPECIES_TEST_U64_OK").unwrap(), Some(500));

        env::set_var("GBIF_SPECIES_TEST_U64_BAD", "quick");
        assert!(get_env_var_as_u64("GBIF_SPECIES_TEST_U64_BAD").is_err());
    }
}
