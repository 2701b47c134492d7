use crate::location::is_absolute_url;

/// What the host draws for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Known { path: &'static str, title: &'static str },
    External { url: &'a str },
    NotFound { path: &'a str },
}

static SITE_MAP: [(&str, &str); 11] = [
    ("/", "Home"),
    ("/login/", "Login"),
    ("/cart/", "Cart"),
    ("/cart/checkout/", "Checkout"),
    ("/analytics/reports/", "Analytics reports"),
    ("/analytics/report/pdf/", "PDF report"),
    ("/analytics/backup/", "Backup"),
    ("/analytics/requirements/", "Requirements"),
    ("/warehouse/", "Warehouse"),
    ("/profile/", "Profile"),
    ("/settings/", "Settings"),
];

impl<'a> Page<'a> {
    pub fn resolve(location: &'a str) -> Self {
        if is_absolute_url(location) {
            return Page::External { url: location };
        }
        SITE_MAP
            .iter()
            .find(|(path, _)| *path == location)
            .map_or(Page::NotFound { path: location }, |&(path, title)| {
                Page::Known { path, title }
            })
    }

    pub fn title(&self) -> &'a str {
        match *self {
            Page::Known { title, .. } => title,
            Page::External { .. } => "External site",
            Page::NotFound { .. } => "Not Found",
        }
    }

    pub fn location(&self) -> &'a str {
        match *self {
            Page::Known { path, .. } => path,
            Page::External { url } => url,
            Page::NotFound { path } => path,
        }
    }
}
