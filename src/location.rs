//! The browsing context: where the host is and where it has been asked to go.

/// Capability to send the browsing context somewhere else.
pub trait Location {
    fn assign(&mut self, href: &str);
}

#[derive(Debug, Clone)]
pub struct History {
    current: String,
    pending: Option<String>,
    visited: Vec<String>,
}

impl History {
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            visited: vec![start.clone()],
            current: start,
            pending: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Requested but not yet loaded destination.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Load the pending destination, if any. Returns the new current path.
    pub fn commit(&mut self) -> Option<&str> {
        let next = self.pending.take()?;
        self.visited.push(next.clone());
        self.current = next;
        Some(&self.current)
    }
}

impl Location for History {
    /// A later assignment replaces an earlier one that has not loaded yet.
    fn assign(&mut self, href: &str) {
        let resolved = resolve(&self.current, href);
        tracing::debug!(from = %self.current, to = %resolved, "navigation requested");
        self.pending = Some(resolved);
    }
}

pub fn is_absolute_url(href: &str) -> bool {
    href.split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(char::is_alphanumeric))
}

/// Split `scheme://host` off an absolute URL. Paths have an empty origin.
fn split_origin(location: &str) -> (&str, &str) {
    if !is_absolute_url(location) {
        return ("", location);
    }
    let host_start = location.find("://").map_or(0, |idx| idx + 3);
    let path_start = location[host_start..]
        .find('/')
        .map_or(location.len(), |idx| host_start + idx);
    location.split_at(path_start)
}

/// Resolve `href` against `base` the way a link on that page would. Links
/// from an external page, root-relative ones included, stay on its origin.
pub fn resolve(base: &str, href: &str) -> String {
    if href.is_empty() {
        return base.to_string();
    }
    if is_absolute_url(href) {
        return href.to_string();
    }

    let (origin, base_path) = split_origin(base);
    if href.starts_with('/') {
        return format!("{origin}{href}");
    }

    let dir = base_path.rfind('/').map_or("/", |idx| &base_path[..=idx]);
    let mut segments: Vec<&str> = Vec::new();
    for segment in dir.split('/').chain(href.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut path = format!("{origin}/{}", segments.join("/"));
    if (href.ends_with('/') || href.ends_with("/.") || href.ends_with("/..") || href == "..")
        && !path.ends_with('/')
    {
        path.push('/');
    }
    path
}
