//! Shopping cart module.
//!
//! Contains the cart and its items.

mod cart;

pub use cart::{Cart, CartItem};
