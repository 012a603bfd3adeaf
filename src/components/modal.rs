use futures_signals::signal::Mutable;
use futures_signals::signal::MutableSignal;
use tracing::debug;

pub const ACCOUNT_MODAL_ID: &str = "accountModal";

/// Visibility of a named dialog. Renderers follow [`Modal::visible_signal`].
#[derive(Debug, Clone)]
pub struct Modal {
    id: String,
    visible: Mutable<bool>,
}

impl Modal {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: Mutable::new(false),
        }
    }

    /// The dialog holding the login/signup form. It opens as soon as it is created.
    pub fn account() -> Self {
        let modal = Self::new(ACCOUNT_MODAL_ID);
        modal.init();
        modal
    }

    pub fn init(&self) {
        self.show();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn show(&self) {
        debug!("modal_show::{}", self.id);
        self.visible.set_neq(true);
    }

    pub fn hide(&self) {
        debug!("modal_hide::{}", self.id);
        self.visible.set_neq(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn visible_signal(&self) -> MutableSignal<bool> {
        self.visible.signal()
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use futures_signals::signal::SignalExt;

    use super::*;

    #[test]
    fn account_modal_opens_on_init() {
        let modal = Modal::account();
        assert_eq!(modal.id(), "accountModal");
        assert!(modal.is_visible());
    }

    #[test]
    fn show_and_hide_toggle_visibility() {
        let modal = Modal::new("recipeModal");
        assert!(!modal.is_visible());
        modal.show();
        assert!(modal.is_visible());
        modal.hide();
        assert!(!modal.is_visible());
    }

    #[test]
    fn signal_reports_current_then_changes() {
        let modal = Modal::new("recipeModal");
        let mut visible = modal.visible_signal().to_stream();
        assert_eq!(tokio_test::block_on(visible.next()), Some(false));
        modal.show();
        assert_eq!(tokio_test::block_on(visible.next()), Some(true));
        modal.hide();
        modal.show();
        // only the latest value is observed
        assert_eq!(tokio_test::block_on(visible.next()), Some(true));
    }
}
