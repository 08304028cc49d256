//! Registry of the desktop shell's views.
//!
//! A [`ViewRegistry`] owns at most one live handle per [`View`]. Opening a
//! view that is already open focuses it instead of creating a second window;
//! closing a view drops its handle. Quitting once the registry is empty is
//! left to the caller.

use std::collections::BTreeMap;

/// The three windows of the point-of-sale shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum View {
    Admin,
    Kitchen,
    Customer,
}

impl View {
    pub const ALL: [View; 3] = [View::Admin, View::Kitchen, View::Customer];

    pub fn name(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Kitchen => "kitchen",
            Self::Customer => "customer",
        }
    }

    /// Page loaded into the view's window.
    pub fn page(self) -> &'static str {
        match self {
            Self::Admin => "admin.html",
            Self::Kitchen => "kitchen.html",
            Self::Customer => "customer.html",
        }
    }

    /// Default window size as `(width, height)`.
    pub fn default_size(self) -> (u32, u32) {
        match self {
            Self::Admin => (1200, 800),
            Self::Kitchen => (1024, 768),
            Self::Customer => (800, 600),
        }
    }
}

/// Windowing backend that creates and focuses view handles.
pub trait ViewHost {
    type Handle;

    fn create(&mut self, view: View) -> Self::Handle;

    fn focus(&mut self, handle: &Self::Handle);
}

#[derive(Debug)]
pub struct ViewRegistry<H> {
    open: BTreeMap<View, H>,
}

impl<H> Default for ViewRegistry<H> {
    fn default() -> Self {
        Self {
            open: BTreeMap::new(),
        }
    }
}

impl<H> ViewRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `view` through `host` if absent, otherwise focuses it.
    ///
    /// Returns `true` when a new handle was created.
    pub fn open_or_focus<V>(&mut self, view: View, host: &mut V) -> bool
    where
        V: ViewHost<Handle = H>,
    {
        if let Some(handle) = self.open.get(&view) {
            host.focus(handle);
            return false;
        }
        let handle = host.create(view);
        self.open.insert(view, handle);
        true
    }

    /// Forgets the handle of a closed view and returns it.
    pub fn close(&mut self, view: View) -> Option<H> {
        self.open.remove(&view)
    }

    pub fn get(&self, view: View) -> Option<&H> {
        self.open.get(&view)
    }

    pub fn is_open(&self, view: View) -> bool {
        self.open.contains_key(&view)
    }

    pub fn open_views(&self) -> impl Iterator<Item = View> + '_ {
        self.open.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{View, ViewHost, ViewRegistry};

    #[derive(Default)]
    struct RecordingHost {
        created: Vec<View>,
        focused: Vec<usize>,
        next_id: usize,
    }

    impl ViewHost for RecordingHost {
        type Handle = usize;

        fn create(&mut self, view: View) -> usize {
            self.created.push(view);
            self.next_id += 1;
            self.next_id
        }

        fn focus(&mut self, handle: &usize) {
            self.focused.push(*handle);
        }
    }

    #[test]
    fn second_open_focuses_existing_window() {
        let mut host = RecordingHost::default();
        let mut registry = ViewRegistry::new();

        assert!(registry.open_or_focus(View::Kitchen, &mut host));
        assert!(!registry.open_or_focus(View::Kitchen, &mut host));

        assert_eq!(host.created, vec![View::Kitchen]);
        assert_eq!(host.focused, vec![1]);
    }

    #[test]
    fn close_allows_reopening() {
        let mut host = RecordingHost::default();
        let mut registry = ViewRegistry::new();

        registry.open_or_focus(View::Customer, &mut host);
        assert_eq!(registry.close(View::Customer), Some(1));
        assert!(registry.is_empty());

        assert!(registry.open_or_focus(View::Customer, &mut host));
        assert_eq!(registry.get(View::Customer), Some(&2));
    }

    #[test]
    fn open_views_are_ordered_by_view() {
        let mut host = RecordingHost::default();
        let mut registry = ViewRegistry::new();

        registry.open_or_focus(View::Customer, &mut host);
        registry.open_or_focus(View::Admin, &mut host);

        assert_eq!(
            registry.open_views().collect::<Vec<_>>(),
            vec![View::Admin, View::Customer]
        );
        assert!(!registry.is_open(View::Kitchen));
    }

    #[test]
    fn view_metadata() {
        assert_eq!(View::Admin.default_size(), (1200, 800));
        assert_eq!(View::Kitchen.page(), "kitchen.html");
        assert_eq!(View::ALL.map(View::name), ["admin", "kitchen", "customer"]);
    }
}
