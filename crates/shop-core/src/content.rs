//! Static page content.
//!
//! Every text the storefront shows outside the catalog: the home hero, the
//! cart overlay labels, the checkout form, the delivery and contacts pages
//! and the footer. Defaults are the shop's own copy; `store.toml` may
//! override any section.

use serde::{Deserialize, Serialize};

/// All page texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContent {
    #[serde(default)]
    pub hero: HeroContent,
    #[serde(default)]
    pub cart: CartContent,
    #[serde(default)]
    pub checkout: CheckoutContent,
    #[serde(default = "default_delivery")]
    pub delivery: Vec<InfoSection>,
    #[serde(default = "default_contacts")]
    pub contacts: Vec<ContactCard>,
    #[serde(default)]
    pub footer: FooterContent,
}

/// Home page hero and featured block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Headline, one entry per line.
    pub headline: Vec<String>,
    pub tagline: String,
    pub cta_label: String,
    pub featured_heading: String,
    pub all_products_label: String,
    pub add_label: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: vec!["Минимализм".to_string(), "в каждой детали".to_string()],
            tagline: "Коллекция одежды и аксессуаров для тех, кто ценит качество и стиль"
                .to_string(),
            cta_label: "Смотреть каталог".to_string(),
            featured_heading: "Популярные товары".to_string(),
            all_products_label: "Все товары".to_string(),
            add_label: "Добавить".to_string(),
        }
    }
}

/// Cart overlay labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartContent {
    pub title: String,
    pub empty: String,
    pub total_label: String,
    pub checkout_label: String,
}

impl Default for CartContent {
    fn default() -> Self {
        Self {
            title: "Корзина".to_string(),
            empty: "Корзина пуста".to_string(),
            total_label: "Итого:".to_string(),
            checkout_label: "Оформить заказ".to_string(),
        }
    }
}

/// Checkout page labels and input placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutContent {
    pub order_heading: String,
    pub contact_heading: String,
    pub confirm_label: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub address_placeholder: String,
}

impl Default for CheckoutContent {
    fn default() -> Self {
        Self {
            order_heading: "Ваш заказ".to_string(),
            contact_heading: "Контактные данные".to_string(),
            confirm_label: "Подтвердить заказ".to_string(),
            name_placeholder: "Иван Иванов".to_string(),
            email_placeholder: "ivan@example.com".to_string(),
            phone_placeholder: "+7 (900) 000-00-00".to_string(),
            address_placeholder: "Улица, дом, квартира".to_string(),
        }
    }
}

impl CheckoutContent {
    /// Placeholder for a form field.
    pub fn placeholder(&self, field: shop_commerce::checkout::CheckoutField) -> &str {
        use shop_commerce::checkout::CheckoutField;
        match field {
            CheckoutField::Name => &self.name_placeholder,
            CheckoutField::Email => &self.email_placeholder,
            CheckoutField::Phone => &self.phone_placeholder,
            CheckoutField::Address => &self.address_placeholder,
        }
    }
}

/// A card on the delivery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSection {
    /// Icon name, resolved by the presentation layer.
    pub icon: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// A card on the contacts page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: String,
    pub title: String,
    pub primary: String,
    pub secondary: String,
}

/// Footer texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub navigation_heading: String,
    pub social_heading: String,
    /// Social network icon names.
    pub social: Vec<String>,
    pub copyright: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            navigation_heading: "Навигация".to_string(),
            social_heading: "Соцсети".to_string(),
            social: vec!["Instagram".to_string(), "Facebook".to_string()],
            copyright: "© 2024 Online Store. Все права защищены".to_string(),
        }
    }
}

fn info(icon: &str, title: &str, lines: &[&str]) -> InfoSection {
    InfoSection {
        icon: icon.to_string(),
        title: title.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn contact(icon: &str, title: &str, primary: &str, secondary: &str) -> ContactCard {
    ContactCard {
        icon: icon.to_string(),
        title: title.to_string(),
        primary: primary.to_string(),
        secondary: secondary.to_string(),
    }
}

fn default_delivery() -> Vec<InfoSection> {
    vec![
        info(
            "Truck",
            "Доставка",
            &[
                "Доставка по Москве — бесплатно при заказе от 5000 ₽",
                "Доставка по России — от 350 ₽, срок 3-7 дней",
            ],
        ),
        info(
            "CreditCard",
            "Оплата",
            &[
                "Принимаем карты Visa, Mastercard, МИР",
                "Оплата при получении для заказов по Москве",
            ],
        ),
        info(
            "RefreshCw",
            "Возврат",
            &["Возврат товара в течение 14 дней без объяснения причин"],
        ),
    ]
}

fn default_contacts() -> Vec<ContactCard> {
    vec![
        contact("Phone", "Телефон", "+7 (495) 000-00-00", "Ежедневно с 10:00 до 21:00"),
        contact("Mail", "Email", "info@onlinestore.ru", "Ответим в течение 24 часов"),
        contact("MapPin", "Адрес", "г. Москва, ул. Примерная, 1", "Шоу-рум работает по записи"),
        contact("Clock", "Режим работы", "Пн-Пт: 10:00 - 21:00", "Сб-Вс: 11:00 - 20:00"),
    ]
}

impl Default for StoreContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StoreContent {
    /// The built-in texts.
    pub fn builtin() -> Self {
        Self {
            hero: HeroContent::default(),
            cart: CartContent::default(),
            checkout: CheckoutContent::default(),
            delivery: default_delivery(),
            contacts: default_contacts(),
            footer: FooterContent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::checkout::CheckoutField;

    #[test]
    fn test_builtin_pages() {
        let content = StoreContent::builtin();
        let titles: Vec<_> = content.delivery.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Доставка", "Оплата", "Возврат"]);
        assert_eq!(content.contacts.len(), 4);
        assert_eq!(content.contacts[1].primary, "info@onlinestore.ru");
    }

    #[test]
    fn test_placeholders() {
        let checkout = CheckoutContent::default();
        assert_eq!(checkout.placeholder(CheckoutField::Name), "Иван Иванов");
        assert_eq!(checkout.placeholder(CheckoutField::Address), "Улица, дом, квартира");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let content: StoreContent = toml::from_str(
            r#"
            [hero]
            cta_label = "В каталог"
            "#,
        )
        .unwrap();
        assert_eq!(content.hero.cta_label, "В каталог");
        assert_eq!(content.hero.add_label, "Добавить");
        assert_eq!(content.delivery.len(), 3);
        assert_eq!(content.cart.empty, "Корзина пуста");
    }
}
