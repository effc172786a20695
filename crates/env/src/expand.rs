//! `${VAR}` interpolation across loaded entries

use crate::map::EnvMap;

/// Expand `${VAR}` references in each value.
///
/// Entries defined earlier in the same file shadow the process environment;
/// a variable found in neither is left verbatim, so a typo stays visible
/// instead of silently vanishing.
#[must_use]
pub fn expand(map: &EnvMap) -> EnvMap {
    let mut expanded = EnvMap::new();
    for (key, value) in map.iter() {
        let resolved = shellexpand::env_with_context_no_errors(value, |var: &str| {
            expanded
                .get(var)
                .map(str::to_string)
                .or_else(|| std::env::var(var).ok())
        });
        let resolved = resolved.into_owned();
        expanded.insert(key, resolved);
    }
    expanded
}
