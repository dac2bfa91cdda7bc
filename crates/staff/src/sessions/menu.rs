//! Menu management screen session.

use brasserie_core::menu::MenuItem;
use brasserie_core::roster::{Reconciled, Roster, RosterEdit};
use brasserie_core::types::{ImageRef, Price};
use tracing::{info, warn};

use crate::forms::MenuItemFormResult;

/// The menu management screen: a roster of menu items plus the
/// operations the screen exposes.
#[derive(Debug, Clone, Default)]
pub struct MenuSession {
    roster: Roster<MenuItem>,
}

impl MenuSession {
    /// A session over an existing roster.
    #[must_use]
    pub const fn new(roster: Roster<MenuItem>) -> Self {
        Self { roster }
    }

    /// A session seeded with the sample menu shown on first launch.
    #[must_use]
    pub fn with_sample_menu() -> Self {
        Self::new(Roster::from(vec![
            MenuItem::new(
                "Pizza Margherita",
                Price::from_cents(1250),
                ImageRef::placeholder(),
            ),
            MenuItem::new(
                "Caesar Salad",
                Price::from_cents(800),
                ImageRef::placeholder(),
            ),
            MenuItem::new(
                "Beef Burger",
                Price::from_cents(1475),
                ImageRef::placeholder(),
            ),
        ]))
    }

    /// The items in display order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        self.roster.records()
    }

    /// Apply a saved add/edit form.
    pub fn save(&mut self, result: MenuItemFormResult) -> Reconciled {
        let name = result.item.name.clone();
        let applied = self.roster.reconcile(result.into_edit());
        match applied {
            Reconciled::Inserted(index) => info!(%name, index, "menu item added"),
            Reconciled::Changed(index) => info!(%name, index, "menu item updated"),
            Reconciled::Stale => warn!(%name, "menu item save hit a stale position"),
            Reconciled::Removed(_) => {}
        }
        applied
    }

    /// The user confirmed a delete for the item at `index`.
    pub fn delete_confirmed(&mut self, index: usize) -> Reconciled {
        let name = self.roster.get(index).map(|item| item.name.clone());
        let applied = self.roster.reconcile(RosterEdit::Remove { index });
        match (&applied, name) {
            (Reconciled::Removed(_), Some(name)) => info!(%name, index, "menu item deleted"),
            _ => warn!(index, "menu item delete hit a stale position"),
        }
        applied
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::forms::MenuItemForm;

    #[test]
    fn test_sample_menu_contents() {
        let session = MenuSession::with_sample_menu();
        let names: Vec<_> = session.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pizza Margherita", "Caesar Salad", "Beef Burger"]);
        assert_eq!(session.items()[1].price.to_string(), "$8.00");
    }

    #[test]
    fn test_add_via_form() {
        let mut session = MenuSession::with_sample_menu();
        let mut form = MenuItemForm::add();
        form.name_changed("Tiramisu");
        form.price_changed("6.50");
        assert_eq!(session.save(form.submit().unwrap()), Reconciled::Inserted(3));
        assert_eq!(session.items()[3].name, "Tiramisu");
    }

    #[test]
    fn test_edit_via_form() {
        let mut session = MenuSession::with_sample_menu();
        let mut form = MenuItemForm::edit(&session.items()[1].clone(), 1);
        form.price_changed("9.00");
        assert_eq!(session.save(form.submit().unwrap()), Reconciled::Changed(1));
        assert_eq!(session.items()[1].price.to_string(), "$9.00");
        // Neighbours untouched
        assert_eq!(session.items()[0].name, "Pizza Margherita");
        assert_eq!(session.items()[2].name, "Beef Burger");
    }

    #[test]
    fn test_delete_confirmed() {
        let mut session = MenuSession::with_sample_menu();
        assert_eq!(session.delete_confirmed(0), Reconciled::Removed(0));
        let names: Vec<_> = session.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Caesar Salad", "Beef Burger"]);
    }

    #[test]
    fn test_stale_delete_is_a_noop() {
        let mut session = MenuSession::with_sample_menu();
        assert_eq!(session.delete_confirmed(7), Reconciled::Stale);
        assert_eq!(session.items().len(), 3);
    }
}
