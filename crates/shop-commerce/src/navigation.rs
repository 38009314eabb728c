//! Page navigation.
//!
//! The storefront shows exactly one page at a time. Navigation is a free
//! graph: every page is reachable from every other one, there are no guards
//! (checkout opens with an empty cart too) and no automatic transitions.
//! The cart review is an overlay tracked separately in
//! [`StoreState`](crate::state::StoreState).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page with hero and featured products.
    #[default]
    Home,
    /// Full catalog with the category filter.
    Catalog,
    /// Order summary and contact form.
    Checkout,
    /// Delivery and payment information.
    Delivery,
    /// Contact details.
    Contacts,
}

/// Pages listed in the header menu, in display order.
pub const HEADER_MENU: [Page; 4] = [Page::Home, Page::Catalog, Page::Delivery, Page::Contacts];

/// Pages listed in the footer menu, in display order.
pub const FOOTER_MENU: [Page; 3] = [Page::Catalog, Page::Delivery, Page::Contacts];

impl Page {
    /// Every page.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Catalog,
        Page::Checkout,
        Page::Delivery,
        Page::Contacts,
    ];

    /// Stable slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Checkout => "checkout",
            Page::Delivery => "delivery",
            Page::Contacts => "contacts",
        }
    }

    /// Label shown in menus and page headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "Главная",
            Page::Catalog => "Каталог",
            Page::Checkout => "Оформление заказа",
            Page::Delivery => "Доставка и оплата",
            Page::Contacts => "Контакты",
        }
    }

    /// Shorter label used in the footer menu.
    pub fn footer_label(&self) -> &'static str {
        match self {
            Page::Delivery => "Доставка",
            other => other.display_name(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Page {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == slug)
            .ok_or_else(|| CommerceError::UnknownPage(s.to_string()))
    }
}
