//! Busy indicator shown while a submission is in flight.

/// Something that can be shown and hidden while a request runs.
pub trait BusyIndicator {
    fn set_visible(&self, visible: bool);
}

impl BusyIndicator for web_sys::HtmlElement {
    fn set_visible(&self, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        if let Err(e) = self.style().set_property("visibility", value) {
            log::warn!("Failed to set indicator visibility: {:?}", e);
        }
    }
}

impl<T: BusyIndicator + ?Sized> BusyIndicator for &T {
    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }
}

/// Shows the indicator on creation and hides it when dropped, so every exit
/// path of a submission (errors and panics included) resets it.
///
/// Guards do not count: with overlapping submissions the last one to settle
/// hides the indicator.
pub struct BusyGuard<I: BusyIndicator> {
    indicator: I,
}

impl<I: BusyIndicator> BusyGuard<I> {
    pub fn show(indicator: I) -> Self {
        indicator.set_visible(true);
        Self { indicator }
    }
}

impl<I: BusyIndicator> Drop for BusyGuard<I> {
    fn drop(&mut self) {
        self.indicator.set_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Flag {
        visible: Cell<bool>,
        writes: RefCell<Vec<bool>>,
    }

    impl BusyIndicator for Flag {
        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
            self.writes.borrow_mut().push(visible);
        }
    }

    #[test]
    fn test_visible_only_while_guard_lives() {
        let flag = Flag::default();
        {
            let _guard = BusyGuard::show(&flag);
            assert!(flag.visible.get());
        }
        assert!(!flag.visible.get());
        assert_eq!(*flag.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_hidden_on_early_return() {
        fn fails(flag: &Flag) -> Result<(), String> {
            let _guard = BusyGuard::show(flag);
            Err::<(), String>("boom".to_string())?;
            Ok(())
        }

        let flag = Flag::default();
        assert!(fails(&flag).is_err());
        assert!(!flag.visible.get());
    }

    #[test]
    fn test_overlapping_guards_last_writer_wins() {
        let flag = Flag::default();
        let first = BusyGuard::show(&flag);
        let second = BusyGuard::show(&flag);
        drop(first);
        assert!(!flag.visible.get());
        drop(second);
        assert_eq!(*flag.writes.borrow(), vec![true, true, false, false]);
    }
}
