//! Name synthesis: template + existing names -> next name.

use nextname_syntax::{Directive, Template};

use crate::resolve;

/// Produce the next available name for `template` given the names already in use.
///
/// ## Returns
/// - The template text (escapes collapsed) when it contains no directive.
/// - Otherwise `prefix + scheme.encode(max + 1) + suffix`. The middle is empty when the successor ordinal has no
///   representation in the scheme (e.g. Roman numerals past 3999).
///
/// ## Examples
/// ```rust
/// use nextname::synthesize_name;
///
/// assert_eq!(synthesize_name("Foo %d", ["Foo"]), "Foo 2");
/// assert_eq!(synthesize_name("NumD %05d", ["NumD 0002"]), "NumD 00003");
/// assert_eq!(synthesize_name("%P Force", ["Delta Force"]), "Echo Force");
/// assert_eq!(synthesize_name("a%%b", ["anything"]), "a%b");
/// ```
#[tracing::instrument(skip(existing_names))]
pub fn synthesize_name<I, S>(template: &str, existing_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match nextname_syntax::parse(template).template {
        Template::Literal(text) => text,
        Template::Directive(directive) => next_name(&directive, existing_names),
    }
}

/// Compose the successor name for an already-parsed directive.
pub fn next_name<I, S>(directive: &Directive, existing_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max = resolve::max_ordinal(
        &directive.prefix,
        &directive.scheme,
        &directive.suffix,
        existing_names,
    );

    let number = match resolve::successor(max) {
        Some(ordinal) => {
            let number = directive.scheme.encode(ordinal);
            if number.is_empty() {
                tracing::debug!(ordinal, scheme = %directive.scheme, "ordinal has no representation in scheme");
            }
            number
        }
        None => {
            tracing::warn!(max, scheme = %directive.scheme, "ordinal range exhausted");
            String::new()
        }
    };

    let mut name = String::with_capacity(directive.prefix.len() + number.len() + directive.suffix.len());
    name.push_str(&directive.prefix);
    name.push_str(&number);
    name.push_str(&directive.suffix);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_literal_template_is_returned() {
        assert_eq!(synthesize_name("", ["x"]), "");
        assert_eq!(synthesize_name("some", ["some"]), "some");
        assert_eq!(synthesize_name("percent%", NONE), "percent%");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(synthesize_name("Bar %d", NONE), "Bar 1");
        assert_eq!(synthesize_name("%p", NONE), "alpha");
        assert_eq!(synthesize_name("Probe %R", NONE), "Probe I");
    }

    #[test]
    fn test_out_of_domain_is_spliced_empty() {
        assert_eq!(synthesize_name("Old %R!", ["Old MMMCMXCIX!"]), "Old !");
        assert_eq!(synthesize_name("%w-ship", ["omega-ship"]), "-ship");
    }

    #[test]
    fn test_exhausted_ordinal_range() {
        assert_eq!(synthesize_name("N%d", ["N32767"]), "N");
    }

    #[test]
    fn test_next_name_reuses_parsed_directive() {
        let parsed = nextname_syntax::parse("Rover %a");
        let directive = parsed.directive().unwrap();
        assert_eq!(next_name(directive, ["Rover a"]), "Rover b");
        assert_eq!(next_name(directive, ["Rover z"]), "Rover aa");
    }
}
