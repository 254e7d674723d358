//! Breadcrumb trail derived from the current route path.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

/// One link in the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Build the trail for `path`, always starting at Home.
///
/// `"/category/ps-5"` yields `Home / Category / Ps 5`.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let mut trail = vec![Crumb {
        label: "Home".to_owned(),
        href: "/".to_owned(),
    }];
    let mut href = String::new();
    for segment in path.split(['?', '#']).next().unwrap_or_default().split('/') {
        if segment.is_empty() {
            continue;
        }
        href.push('/');
        href.push_str(segment);
        trail.push(Crumb {
            label: segment_label(segment),
            href: href.clone(),
        });
    }
    trail
}

/// Title-case a path segment, treating `-` and `_` as word breaks.
pub fn segment_label(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
