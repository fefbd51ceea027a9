//! Per-run operation configuration.

use std::sync::Arc;

use compact_str::CompactString;
use pictor_core::{EventBus, MediaItem, MediaStore, Navigator, SelectionSource};
use serde::{Deserialize, Serialize};

/// Where an operation was invoked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationOrigin {
    /// The main photo browser.
    #[default]
    Browser,
    /// An album's own view.
    AlbumView,
    /// The camera's review screen.
    Camera,
}

/// The authoritative target set for one run.
///
/// Exactly one flavor per context: an explicit list, or the live
/// selection of a view. Setting one replaces the other.
pub(crate) enum Target<T> {
    Items(Vec<T>),
    Selection(Arc<dyn SelectionSource<T>>),
}

/// Everything one operation run needs from its caller.
///
/// Built once per run with the chainable `with_*` methods and consumed
/// by a `start_*` entry point; contexts are never reused.
pub struct OperationContext<T = MediaItem> {
    pub(crate) target: Option<Target<T>>,
    pub(crate) bus: Arc<dyn EventBus>,
    pub(crate) store: Arc<dyn MediaStore>,
    pub(crate) navigator: Option<Arc<dyn Navigator>>,
    pub(crate) origin: OperationOrigin,
    pub(crate) on_start: Option<Box<dyn FnOnce() + Send>>,
    pub(crate) album_prefix: CompactString,
}

impl<T> OperationContext<T> {
    /// Create a context with no target configured.
    pub fn new(bus: Arc<dyn EventBus>, store: Arc<dyn MediaStore>) -> Self {
        Self {
            target: None,
            bus,
            store,
            navigator: None,
            origin: OperationOrigin::default(),
            on_start: None,
            album_prefix: CompactString::const_new("Album"),
        }
    }

    /// Target an explicit item list.
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.target = Some(Target::Items(items));
        self
    }

    /// Target the live selection of a view.
    pub fn with_selection(mut self, selection: Arc<dyn SelectionSource<T>>) -> Self {
        self.target = Some(Target::Selection(selection));
        self
    }

    /// Set the invocation origin.
    pub fn with_origin(mut self, origin: OperationOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Set the navigator for flows that leave the current screen.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Set the localized prefix for allocated album names.
    pub fn with_album_prefix(mut self, prefix: impl Into<CompactString>) -> Self {
        self.album_prefix = prefix.into();
        self
    }

    /// Set a hook fired once when the run actually starts, after any
    /// confirmation dialog.
    pub fn on_start(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Number of items the run would target.
    pub(crate) fn selected_count(&self) -> usize {
        match &self.target {
            Some(Target::Items(items)) => items.len(),
            Some(Target::Selection(selection)) => selection.selected_count(),
            None => 0,
        }
    }

    /// Size of the whole backing view, selection ignored.
    pub(crate) fn total_count(&self) -> usize {
        match &self.target {
            Some(Target::Items(items)) => items.len(),
            Some(Target::Selection(selection)) => selection.total_count(),
            None => 0,
        }
    }

    /// Whether the backing view is in select-all mode.
    pub(crate) fn is_select_all(&self) -> bool {
        match &self.target {
            Some(Target::Selection(selection)) => selection.is_select_all(),
            _ => false,
        }
    }

    /// Resolve the selected items, consuming the target.
    pub(crate) fn take_selected(&mut self) -> Vec<T> {
        match self.target.take() {
            Some(Target::Items(items)) => items,
            Some(Target::Selection(selection)) => selection.selected_items(),
            None => Vec::new(),
        }
    }

    /// Resolve the whole backing view, consuming the target.
    pub(crate) fn take_all(&mut self) -> Vec<T> {
        match self.target.take() {
            Some(Target::Items(items)) => items,
            Some(Target::Selection(selection)) => selection.all_items(),
            None => Vec::new(),
        }
    }

    /// Fire the start hook, at most once.
    pub(crate) fn fire_on_start(&mut self) {
        if let Some(hook) = self.on_start.take() {
            hook();
        }
    }
}
