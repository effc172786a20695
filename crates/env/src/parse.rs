//! KEY=VALUE file parsing

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::map::EnvMap;

/// Parse the contents of a KEY=VALUE environment file.
///
/// Blank lines and `#` comments are skipped; an `export ` prefix is
/// accepted so shell-flavored files load unchanged; single or double quotes
/// around a value are stripped. Duplicate keys keep the last value.
pub fn parse_str(content: &str) -> Result<EnvMap> {
    let mut map = EnvMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            bail!("line {}: expected KEY=VALUE, got '{}'", index + 1, raw);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("line {}: empty key", index + 1);
        }

        let value = value.trim();
        let value = value.trim_matches('"').trim_matches('\'');
        map.insert(key, value);
    }

    debug!("parsed {} environment variables", map.len());
    Ok(map)
}

/// Read and parse an environment file from disk
pub fn parse_file(path: &Path) -> Result<EnvMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read environment file '{}'", path.display()))?;
    parse_str(&content)
        .with_context(|| format!("failed to parse environment file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_entries() {
        let input = r#"
# credentials
API_KEY=abc123
DATABASE_URL="postgres://localhost/app"
export SECRET_KEY='hush'
"#;

        let env = parse_str(input).unwrap();
        assert_eq!(env.get("API_KEY"), Some("abc123"));
        assert_eq!(env.get("DATABASE_URL"), Some("postgres://localhost/app"));
        assert_eq!(env.get("SECRET_KEY"), Some("hush"));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn later_duplicate_wins() {
        let env = parse_str("KEY=first\nKEY=second\n").unwrap();
        assert_eq!(env.get("KEY"), Some("second"));
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let env = parse_str("QUERY=a=1&b=2\n").unwrap();
        assert_eq!(env.get("QUERY"), Some("a=1&b=2"));
    }

    #[test]
    fn empty_value_is_preserved() {
        let env = parse_str("EMPTY=\n").unwrap();
        assert_eq!(env.get("EMPTY"), Some(""));
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = parse_str("GOOD=1\nnot a pair\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn preserves_file_order() {
        let env = parse_str("B=2\nA=1\nC=3\n").unwrap();
        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }
}
