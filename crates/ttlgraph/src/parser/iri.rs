//! Relative IRI resolution (RFC 3986, section 5.2).

/// Components of an IRI reference, without its fragment.
#[derive(Debug, Default, PartialEq)]
struct Parts<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
}

/// True when `reference` starts with `scheme:`.
pub fn has_scheme(reference: &str) -> bool {
    let Some(colon) = reference.find(':') else {
        return false;
    };
    let scheme = &reference[..colon];
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolve `reference` against the absolute IRI `base`.
pub fn resolve(base: &str, reference: &str) -> String {
    if has_scheme(reference) {
        return reference.to_string();
    }

    let (reference, fragment) = split_fragment(reference);
    let base = split(split_fragment(base).0);
    let r = split(reference);

    let (authority, path, query) = if reference.starts_with("//") {
        (r.authority, remove_dot_segments(r.path), r.query)
    } else if r.path.is_empty() {
        (base.authority, base.path.to_string(), r.query.or(base.query))
    } else if r.path.starts_with('/') {
        (base.authority, remove_dot_segments(r.path), r.query)
    } else {
        let merged = if base.authority.is_some() && base.path.is_empty() {
            format!("/{}", r.path)
        } else {
            let dir = base.path.rfind('/').map_or("", |pos| &base.path[..=pos]);
            format!("{dir}{}", r.path)
        };
        (base.authority, remove_dot_segments(&merged), r.query)
    };

    let mut target = String::new();
    if let Some(scheme) = base.scheme {
        target.push_str(scheme);
        target.push(':');
    }
    if let Some(authority) = authority {
        target.push_str("//");
        target.push_str(authority);
    }
    target.push_str(&path);
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }
    if let Some(fragment) = fragment {
        target.push('#');
        target.push_str(fragment);
    }
    target
}

fn split_fragment(iri: &str) -> (&str, Option<&str>) {
    match iri.find('#') {
        Some(pos) => (&iri[..pos], Some(&iri[pos + 1..])),
        None => (iri, None),
    }
}

fn split(iri: &str) -> Parts<'_> {
    let (scheme, rest) = if has_scheme(iri) {
        let colon = iri.find(':').unwrap_or(0);
        (Some(&iri[..colon]), &iri[colon + 1..])
    } else {
        (None, iri)
    };

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?']).unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    let (path, query) = match rest.find('?') {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    Parts {
        scheme,
        authority,
        path,
        query,
    }
}

/// Remove `.` and `..` segments from a path (RFC 3986, section 5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." | ".." => {
                if *segment == ".." && output.len() > 1 {
                    output.pop();
                }
                // a trailing dot segment still leaves the path ending in '/'
                if i == last {
                    output.push("");
                }
            }
            s => output.push(s),
        }
    }

    output.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://a/b/c/d;p?q";

    #[test]
    fn absolute_reference_is_unchanged() {
        assert!(has_scheme("urn:isbn:123"));
        assert!(!has_scheme("../x"));
        assert!(!has_scheme("1a:b"));
        assert_eq!(resolve(BASE, "urn:isbn:123"), "urn:isbn:123");
    }

    #[test]
    fn rfc3986_normal_examples() {
        assert_eq!(resolve(BASE, "g"), "http://a/b/c/g");
        assert_eq!(resolve(BASE, "./g"), "http://a/b/c/g");
        assert_eq!(resolve(BASE, "g/"), "http://a/b/c/g/");
        assert_eq!(resolve(BASE, "/g"), "http://a/g");
        assert_eq!(resolve(BASE, "//g"), "http://g");
        assert_eq!(resolve(BASE, "?y"), "http://a/b/c/d;p?y");
        assert_eq!(resolve(BASE, "#s"), "http://a/b/c/d;p?q#s");
        assert_eq!(resolve(BASE, "g?y#s"), "http://a/b/c/g?y#s");
        assert_eq!(resolve(BASE, ""), "http://a/b/c/d;p?q");
        assert_eq!(resolve(BASE, "."), "http://a/b/c/");
        assert_eq!(resolve(BASE, ".."), "http://a/b/");
        assert_eq!(resolve(BASE, "../g"), "http://a/b/g");
        assert_eq!(resolve(BASE, "../../g"), "http://a/g");
    }

    #[test]
    fn base_without_path() {
        assert_eq!(resolve("http://example.org", "alice"), "http://example.org/alice");
    }
}
