use super::action::Action;
use crate::domain::models::{Anchor, QuickAction, SearchItem};
use crate::domain::navigation::Navigator;
use tokio::sync::mpsc;

/// Turns palette navigation into `ScrollToAnchor` actions for the event loop.
#[derive(Debug, Clone)]
pub struct ActionNavigator {
    tx: mpsc::Sender<Action>,
}

impl ActionNavigator {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }

    fn dispatch(&self, anchor: &Anchor) {
        // Fire-and-forget: a full or closed queue drops the request.
        if let Err(err) = self.tx.try_send(Action::ScrollToAnchor(anchor.clone())) {
            tracing::warn!(%anchor, error = %err, "navigation dropped");
        }
    }
}

impl Navigator for ActionNavigator {
    fn navigate(&mut self, item: &SearchItem) {
        self.dispatch(&item.href);
    }

    fn follow_quick_action(&mut self, action: &QuickAction) {
        self.dispatch(&action.href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Section;

    #[tokio::test]
    async fn test_navigate_posts_scroll_action() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut nav = ActionNavigator::new(tx);
        let item = SearchItem {
            id: "about-skills".to_string(),
            title: "Skills".to_string(),
            description: String::new(),
            keywords: vec![],
            section: Section::About,
            href: Anchor::new("about"),
        };

        nav.navigate(&item);
        nav.follow_quick_action(&QuickAction::defaults()[2]);

        assert_eq!(rx.recv().await, Some(Action::ScrollToAnchor(Anchor::new("about"))));
        assert_eq!(rx.recv().await, Some(Action::ScrollToAnchor(Anchor::new("contact"))));
    }

    #[test]
    fn test_full_queue_does_not_block() {
        let (tx, _rx) = mpsc::channel(1);
        let mut nav = ActionNavigator::new(tx);
        let action = &QuickAction::defaults()[0];
        nav.follow_quick_action(action);
        nav.follow_quick_action(action);
    }
}
