use super::models::{QuickAction, SearchItem};

/// The "go to this destination" side effect behind the palette.
///
/// Calls are fire-and-forget: the palette neither waits on nor retries them,
/// and an href with no destination is for the implementor to ignore.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, item: &SearchItem);

    fn follow_quick_action(&mut self, action: &QuickAction);
}
