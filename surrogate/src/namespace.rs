//! Event-name computation.
//!
//! All events for one proxy publish under a single namespace: the explicit
//! one the caller supplied, or the target's short type name in lowercase
//! underscore form. Per-method event names follow the wire convention
//! `{namespace}.pre_{snake_method}` / `{namespace}.post_{snake_method}`.

/// Which side of the real call an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the real method runs.
    Pre,
    /// After the real method returned.
    Post,
}

impl Phase {
    fn prefix(self) -> &'static str {
        match self {
            Phase::Pre => "pre",
            Phase::Post => "post",
        }
    }
}

/// Convert a camel-case identifier to lowercase underscore form.
///
/// An underscore is inserted before each uppercase run boundary and the
/// whole string is lowercased: `firstMethod` → `first_method`,
/// `MyWidgetFoo` → `my_widget_foo`, `HTTPServer` → `http_server`. Names
/// already in snake case pass through unchanged.
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let boundary = match index.checked_sub(1).map(|i| chars[i]) {
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                Some(prev) if prev.is_uppercase() => {
                    // End of an uppercase run: HTTP|Server
                    chars.get(index + 1).is_some_and(|next| next.is_lowercase())
                }
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Assemble the full event name for one interception phase.
pub fn event_name(namespace: &str, phase: Phase, method: &str) -> String {
    format!("{namespace}.{}_{}", phase.prefix(), underscore(method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_converts_to_snake_case() {
        assert_eq!(underscore("firstMethod"), "first_method");
        assert_eq!(underscore("MyWidgetFoo"), "my_widget_foo");
        assert_eq!(underscore("Gadget"), "gadget");
    }

    #[test]
    fn uppercase_runs_break_before_the_last_letter() {
        assert_eq!(underscore("HTTPServer"), "http_server");
        assert_eq!(underscore("parseJSON"), "parse_json");
    }

    #[test]
    fn snake_case_passes_through() {
        assert_eq!(underscore("first_method"), "first_method");
        assert_eq!(underscore("already"), "already");
    }

    #[test]
    fn digits_count_as_run_boundaries() {
        assert_eq!(underscore("base64Encode"), "base64_encode");
    }

    #[test]
    fn event_names_follow_the_wire_convention() {
        assert_eq!(event_name("test", Phase::Pre, "firstMethod"), "test.pre_first_method");
        assert_eq!(event_name("test", Phase::Post, "firstMethod"), "test.post_first_method");
    }
}
