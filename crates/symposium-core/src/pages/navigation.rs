//! Site navigation: mobile menu toggle and active-link marking.

/// Page served for an empty path.
pub const INDEX_PAGE: &str = "index.html";

/// A link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    /// Rendered with the `active` class and `aria-current="page"`.
    pub active: bool,
}

impl NavLink {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            active: false,
        }
    }
}

/// Last segment of `pathname`, or `index.html` when it is empty.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => INDEX_PAGE,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Mirrors `aria-expanded` on the toggle and `active` on the menu.
    pub menu_expanded: bool,
    pub links: Vec<NavLink>,
}

impl NavigationState {
    pub fn new<I, T>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            menu_expanded: false,
            links: hrefs.into_iter().map(|h| NavLink::new(h.as_ref())).collect(),
        }
    }

    /// Flip the mobile menu and return the new expanded state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_expanded = !self.menu_expanded;
        self.menu_expanded
    }

    /// Mark every link pointing at the current page; returns their hrefs.
    ///
    /// Links are only ever marked, never cleared.
    pub fn mark_active(&mut self, pathname: &str) -> Vec<String> {
        let page = current_page(pathname);
        let mut marked = Vec::new();
        for link in self.links.iter_mut().filter(|l| l.href == page) {
            link.active = true;
            marked.push(link.href.clone());
        }
        marked
    }
}
