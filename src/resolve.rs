//! Ordinal resolution: find the highest ordinal already used by names that fit a directive.
//!
//! A name fits when it starts with the directive's prefix and ends with its suffix. The text in between is decoded
//! through the directive's scheme; text the scheme cannot read is ignored.
//!
//! ## Bare names
//!
//! When the suffix is empty, a name equal to the prefix itself (`"Foo"` for `"Foo%d"`) counts as ordinal 1, so the
//! next name is number 2. If nothing else matched, a name equal to the *trimmed* prefix also counts: `"Foo"` is the
//! first of `"Foo %d"` even though it lacks the trailing space.

use nextname_core::{NumberingScheme, Ordinal};

/// Return the highest ordinal represented in `names`, or `0` if none is.
///
/// ## Parameters
/// - `prefix` / `suffix`: literal text around the directive, escapes already collapsed.
/// - `scheme`: the directive's scheme, used to decode the middle of each candidate name.
/// - `names`: existing names, in any order, duplicates allowed.
///
/// ## Examples
/// ```rust
/// use nextname::resolve::max_ordinal;
/// use nextname_core::registry;
///
/// let roman = registry::scheme('R').unwrap();
/// assert_eq!(max_ordinal("RomD ", &roman, "", ["RomD XX", "RomD V", "Other"]), 20);
/// assert_eq!(max_ordinal("Foo ", &roman, "", ["Foo"]), 1);
/// ```
pub fn max_ordinal<I, S>(prefix: &str, scheme: &NumberingScheme, suffix: &str, names: I) -> Ordinal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bare = prefix.trim();
    let mut max: Ordinal = 0;
    let mut bare_seen = false;

    for name in names {
        let name = name.as_ref();
        if suffix.is_empty() && name == bare {
            bare_seen = true;
        }

        let Some(middle) = name.strip_prefix(prefix).and_then(|rest| rest.strip_suffix(suffix)) else {
            continue;
        };

        let ordinal = if middle.is_empty() {
            if !suffix.is_empty() {
                continue;
            }
            1
        } else {
            match scheme.decode(middle) {
                Some(ordinal) => ordinal,
                None => continue,
            }
        };

        tracing::trace!(existing = name, ordinal, "existing name matches template");
        max = max.max(ordinal);
    }

    if max == 0 && bare_seen {
        tracing::trace!(bare, "bare prefix counts as the first name");
        max = 1;
    }
    max
}

/// Return the ordinal following `max`, or `None` once the ordinal range is exhausted.
pub fn successor(max: Ordinal) -> Option<Ordinal> {
    max.checked_add(1).filter(|&n| n > 0)
}
