//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use shop_commerce::prelude::*;
use shop_core::StoreApp;

use crate::context::Context;
use crate::render;

/// What picking a menu item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Act(StoreAction),
    FillForm,
    Confirm,
    Quit,
}

/// One selectable line.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub choice: Choice,
}

impl MenuItem {
    fn new(label: impl Into<String>, choice: Choice) -> Self {
        Self {
            label: label.into(),
            choice,
        }
    }

    fn act(label: impl Into<String>, action: StoreAction) -> Self {
        Self::new(label, Choice::Act(action))
    }
}

/// Menu for the current state: page actions first, then navigation.
pub fn menu(app: &StoreApp, state: &StoreState) -> Vec<MenuItem> {
    let view = app.view(state);
    let content = app.content();
    let mut items = Vec::new();

    if view.cart_open {
        for line in &view.cart_lines {
            let id = line.product_id;
            items.push(MenuItem::act(
                format!("+ {}", line.name),
                StoreAction::SetQuantity(id, line.quantity.saturating_add(1)),
            ));
            items.push(MenuItem::act(
                format!("\u{2212} {}", line.name),
                StoreAction::SetQuantity(id, line.quantity - 1),
            ));
            items.push(MenuItem::act(
                format!("\u{2715} {}", line.name),
                StoreAction::RemoveFromCart(id),
            ));
        }
        if !view.cart_is_empty() {
            items.push(MenuItem::act(
                content.cart.checkout_label.clone(),
                StoreAction::Checkout,
            ));
        }
        items.push(MenuItem::act("\u{2190}", StoreAction::CloseCart));
        items.push(MenuItem::new("Exit", Choice::Quit));
        return items;
    }

    let add = |product: &Product| {
        MenuItem::act(
            format!("{}: {} {}", content.hero.add_label, product.name, product.price_display()),
            StoreAction::AddToCart(product.clone()),
        )
    };

    match view.page {
        Page::Home => {
            items.push(MenuItem::act(
                content.hero.cta_label.clone(),
                StoreAction::Navigate(Page::Catalog),
            ));
            items.extend(view.featured.iter().map(add));
        }
        Page::Catalog => {
            items.extend(
                view.categories
                    .iter()
                    .filter(|chip| !chip.selected)
                    .map(|chip| {
                        MenuItem::act(
                            format!("[{}]", chip.label),
                            StoreAction::SelectCategory(chip.filter.clone()),
                        )
                    }),
            );
            items.extend(view.products.iter().map(add));
        }
        Page::Checkout => {
            items.push(MenuItem::new(
                content.checkout.contact_heading.clone(),
                Choice::FillForm,
            ));
            items.push(MenuItem::new(
                content.checkout.confirm_label.clone(),
                Choice::Confirm,
            ));
        }
        Page::Delivery | Page::Contacts => {}
    }

    items.extend(
        view.header_menu
            .iter()
            .filter(|entry| !entry.active)
            .map(|entry| MenuItem::act(format!("\u{2192} {}", entry.label), StoreAction::Navigate(entry.page))),
    );

    let cart_label = match view.badge {
        Some(count) => format!("{} ({})", content.cart.title, count),
        None => content.cart.title.clone(),
    };
    items.push(MenuItem::act(cart_label, StoreAction::OpenCart));
    items.push(MenuItem::new("Exit", Choice::Quit));
    items
}

/// Run the browse command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let app = ctx.app();
    let log = ctx.logger(&app);
    let theme = ColorfulTheme::default();
    let mut state = app.initial_state();
    let mut form = CheckoutForm::default();

    log.info("browse session started");

    loop {
        ctx.output.text("");
        ctx.output.text(&render::header(&app, &app.view(&state)));
        ctx.output.text("");
        if state.cart_open {
            ctx.output.text(&render::cart(&app, &state));
        } else {
            ctx.output.text(&render::page(&app, &state));
        }
        ctx.output.text("");

        let items = menu(&app, &state);
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        let picked = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact()?;

        let Some(item) = items.into_iter().nth(picked) else {
            continue;
        };

        match item.choice {
            Choice::Act(action) => app.dispatch(&mut state, action, &log),
            Choice::FillForm => fill_form(&mut form, &app, &theme)?,
            Choice::Confirm => confirm(ctx, &form, &state),
            Choice::Quit => break,
        }
    }

    log.info_builder("browse session ended")
        .field_i64("cart_items", state.cart.total_item_count())
        .emit();
    Ok(())
}

fn fill_form(form: &mut CheckoutForm, app: &StoreApp, theme: &ColorfulTheme) -> Result<()> {
    for field in CheckoutField::ALL {
        let placeholder = app.content().checkout.placeholder(field);
        let typed: String = Input::with_theme(theme)
            .with_prompt(prompt_label(field, placeholder))
            .with_initial_text(form.get(field))
            .allow_empty(true)
            .interact_text()?;
        apply_answer(form, field, typed);
    }
    Ok(())
}

/// Field prompt with the placeholder shown as a hint.
fn prompt_label(field: CheckoutField, placeholder: &str) -> String {
    format!("{} ({})", field.label(), placeholder)
}

/// Store an answer exactly as typed; a blank answer stays blank.
fn apply_answer(form: &mut CheckoutForm, field: CheckoutField, typed: String) {
    form.set(field, typed);
}

/// The confirm button submits nothing; show what would have been sent.
fn confirm(ctx: &Context, form: &CheckoutForm, state: &StoreState) {
    if !form.can_confirm() {
        return;
    }
    let summary = OrderSummary::from_cart(&state.cart);
    ctx.output.header(&ctx.config.content.checkout.order_heading);
    for field in CheckoutField::ALL {
        ctx.output.kv(field.label(), form.get(field));
    }
    ctx.output.kv(
        ctx.config.content.cart.total_label.trim_end_matches(':'),
        &summary.total.display(),
    );
    ctx.output.info("Orders are not submitted anywhere.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> StoreApp {
        StoreApp::bundled().unwrap()
    }

    fn labels(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    fn pick(items: &[MenuItem], label: &str) -> Choice {
        items
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.choice.clone())
            .unwrap()
    }

    #[test]
    fn test_home_menu() {
        let app = app();
        let state = app.initial_state();
        let items = menu(&app, &state);
        let labels = labels(&items);

        assert_eq!(labels[0], "Смотреть каталог");
        assert_eq!(labels.iter().filter(|l| l.starts_with("Добавить")).count(), 3);
        assert!(!labels.contains(&"\u{2192} Главная"));
        assert!(labels.contains(&"\u{2192} Каталог"));
        assert!(labels.contains(&"Корзина"));
        assert_eq!(labels.last(), Some(&"Exit"));
    }

    #[test]
    fn test_catalog_menu_hides_selected_category() {
        let app = app();
        let mut state = app.initial_state();
        state.apply(StoreAction::Navigate(Page::Catalog));
        let items = menu(&app, &state);

        assert!(!labels(&items).contains(&"[Все]"));
        let Choice::Act(action) = pick(&items, "[Аксессуары]") else {
            panic!("expected an action");
        };
        state.apply(action);

        let items = menu(&app, &state);
        assert!(labels(&items).contains(&"[Все]"));
        assert_eq!(labels(&items).iter().filter(|l| l.starts_with("Добавить")).count(), 2);
    }

    #[test]
    fn test_cart_menu() {
        let app = app();
        let mut state = app.initial_state();
        state.apply(StoreAction::OpenCart);
        assert_eq!(labels(&menu(&app, &state)), vec!["\u{2190}", "Exit"]);

        let bag = app.catalog().get(ProductId::new(3)).cloned().unwrap();
        state.apply(StoreAction::AddToCart(bag));
        let items = menu(&app, &state);
        assert_eq!(
            pick(&items, "\u{2212} Кожаная сумка"),
            Choice::Act(StoreAction::SetQuantity(ProductId::new(3), 0))
        );
        assert_eq!(pick(&items, "Оформить заказ"), Choice::Act(StoreAction::Checkout));
    }

    #[test]
    fn test_checkout_menu() {
        let app = app();
        let mut state = app.initial_state();
        state.apply(StoreAction::Navigate(Page::Checkout));
        let items = menu(&app, &state);
        assert_eq!(pick(&items, "Контактные данные"), Choice::FillForm);
        assert_eq!(pick(&items, "Подтвердить заказ"), Choice::Confirm);
    }

    #[test]
    fn test_blank_answer_is_not_replaced_by_placeholder() {
        let app = app();
        let placeholder = app.content().checkout.placeholder(CheckoutField::Name);
        let mut form = CheckoutForm::default();

        apply_answer(&mut form, CheckoutField::Name, String::new());
        assert_eq!(form.get(CheckoutField::Name), "");
        assert_ne!(form.get(CheckoutField::Name), placeholder);

        apply_answer(&mut form, CheckoutField::Email, "a@b.ru".to_string());
        assert_eq!(form.get(CheckoutField::Email), "a@b.ru");
    }

    #[test]
    fn test_prompt_label_shows_placeholder() {
        let app = app();
        let placeholder = app.content().checkout.placeholder(CheckoutField::Name);
        let label = prompt_label(CheckoutField::Name, placeholder);
        assert!(label.starts_with(CheckoutField::Name.label()));
        assert!(label.contains("Иван Иванов"));
    }
}
