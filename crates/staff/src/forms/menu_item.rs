//! Add/edit menu item form.

use brasserie_core::menu::MenuItem;
use brasserie_core::roster::RosterEdit;
use brasserie_core::types::ImageRef;
use brasserie_core::validate::{self, FieldError};

/// The inline errors shown next to the menu item fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemFormErrors {
    pub name: Option<FieldError>,
    pub price: Option<FieldError>,
}

impl MenuItemFormErrors {
    /// Whether no field shows an error.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// A saved form: the record plus the position it came from (`None` for
/// a new item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemFormResult {
    pub item: MenuItem,
    pub position: Option<usize>,
}

impl MenuItemFormResult {
    /// Turn the saved form into the roster edit it represents.
    #[must_use]
    pub fn into_edit(self) -> RosterEdit<MenuItem> {
        match self.position {
            None => RosterEdit::Append(self.item),
            Some(index) => RosterEdit::Update {
                index,
                record: self.item,
            },
        }
    }
}

/// State machine behind the add/edit menu item screen.
///
/// In edit mode the form carries the record's position, captured when
/// the screen opened, and hands it back unchanged with the saved item.
#[derive(Debug, Clone, Default)]
pub struct MenuItemForm {
    name: String,
    price: String,
    image: Option<ImageRef>,
    position: Option<usize>,
}

impl MenuItemForm {
    /// An empty form for adding a new item.
    #[must_use]
    pub fn add() -> Self {
        Self::default()
    }

    /// A form prefilled from an existing item at `position`.
    #[must_use]
    pub fn edit(item: &MenuItem, position: usize) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.amount().to_string(),
            image: Some(item.image.clone()),
            position: Some(position),
        }
    }

    /// The position being edited, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// The user edited the name field.
    pub fn name_changed(&mut self, value: &str) {
        self.name = value.to_owned();
    }

    /// The user edited the price field.
    pub fn price_changed(&mut self, value: &str) {
        self.price = value.to_owned();
    }

    /// The user picked a picture.
    pub fn image_selected(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    /// Validate and build the result, or report the field errors.
    ///
    /// # Errors
    ///
    /// Returns the inline errors when the name is empty or the price is
    /// not a non-negative number.
    pub fn submit(&self) -> Result<MenuItemFormResult, MenuItemFormErrors> {
        let name = self.name.trim();
        let name_check = validate::non_empty(name);
        let price_check = validate::price(self.price.trim());

        match (name_check, price_check) {
            (Ok(()), Ok(price)) => Ok(MenuItemFormResult {
                item: MenuItem::new(name, price, self.image.clone().unwrap_or_default()),
                position: self.position,
            }),
            (name_check, price_check) => Err(MenuItemFormErrors {
                name: name_check.err(),
                price: price_check.err(),
            }),
        }
    }
}
