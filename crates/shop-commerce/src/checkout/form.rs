//! Checkout contact form.

use serde::{Deserialize, Serialize};

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutField {
    Name,
    Email,
    Phone,
    Address,
}

impl CheckoutField {
    /// Every field, in display order.
    pub const ALL: [CheckoutField; 4] = [
        CheckoutField::Name,
        CheckoutField::Email,
        CheckoutField::Phone,
        CheckoutField::Address,
    ];

    /// HTML id / config key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Email => "email",
            CheckoutField::Phone => "phone",
            CheckoutField::Address => "address",
        }
    }

    /// Field label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Имя",
            CheckoutField::Email => "Email",
            CheckoutField::Phone => "Телефон",
            CheckoutField::Address => "Адрес доставки",
        }
    }

    /// Whether the field is a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        matches!(self, CheckoutField::Address)
    }
}

/// Contact details typed into the checkout form.
///
/// Values are kept exactly as typed: nothing is trimmed, required or
/// checked, and confirming the order is always allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CheckoutForm {
    /// Get a field's value.
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Name => &self.name,
            CheckoutField::Email => &self.email,
            CheckoutField::Phone => &self.phone,
            CheckoutField::Address => &self.address,
        }
    }

    /// Set a field's value.
    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        let slot = match field {
            CheckoutField::Name => &mut self.name,
            CheckoutField::Email => &mut self.email,
            CheckoutField::Phone => &mut self.phone,
            CheckoutField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// The confirm button is never disabled.
    pub fn can_confirm(&self) -> bool {
        true
    }
}
