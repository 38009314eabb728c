//! Application components and pages.

use leptos::prelude::*;
use leptos_meta::*;
use shop_commerce::prelude::*;

use crate::store::{icon_glyph, Store};

fn use_store() -> Store {
    expect_context::<Store>()
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = Store::bundled();
    provide_context(store);

    let settings = store.settings();

    view! {
        <Meta name="description" content=settings.description/>
        <Title text=settings.title/>

        <Header/>
        <main>
            {move || match store.page() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::Catalog => view! { <CatalogPage/> }.into_any(),
                Page::Checkout => view! { <CheckoutPage/> }.into_any(),
                Page::Delivery => view! { <DeliveryPage/> }.into_any(),
                Page::Contacts => view! { <ContactsPage/> }.into_any(),
            }}
        </main>
        <Footer/>
        <Show when=move || store.cart_open()>
            <CartSheet/>
        </Show>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let store = use_store();
    let view = Memo::new(move |_| store.view());
    let brand = store.settings().name;

    view! {
        <header>
            <button class="brand" on:click=move |_| store.dispatch(StoreAction::Navigate(Page::Home))>
                {brand}
            </button>
            <nav>
                {move || view.with(|v| v.header_menu.clone()).into_iter().map(|entry| {
                    view! { <MenuLink entry=entry/> }
                }).collect_view()}
            </nav>
            <button class="cart-button" on:click=move |_| store.dispatch(StoreAction::OpenCart)>
                {icon_glyph("ShoppingBag")}
                {move || view.with(|v| v.badge).map(|count| view! {
                    <span class="badge">{count}</span>
                })}
            </button>
        </header>
    }
}

#[component]
fn MenuLink(entry: MenuEntry) -> impl IntoView {
    let store = use_store();
    let page = entry.page;

    view! {
        <button
            class="menu-link"
            class:active=entry.active
            on:click=move |_| store.dispatch(StoreAction::Navigate(page))
        >
            {entry.label}
        </button>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let store = use_store();
    let view = Memo::new(move |_| store.view());
    let settings = store.settings();
    let footer = store.content().footer;

    view! {
        <footer>
            <div class="footer-brand">
                <h3>{settings.name}</h3>
                <p>{settings.description}</p>
            </div>
            <div class="footer-nav">
                <h4>{footer.navigation_heading}</h4>
                {move || view.with(|v| v.footer_menu.clone()).into_iter().map(|entry| {
                    view! { <MenuLink entry=entry/> }
                }).collect_view()}
            </div>
            <div class="footer-social">
                <h4>{footer.social_heading}</h4>
                {footer.social.into_iter().map(|name| view! {
                    <span class="social" title=name.clone()>{icon_glyph(&name)}</span>
                }).collect_view()}
            </div>
            <p class="copyright">{footer.copyright}</p>
        </footer>
    }
}

// ============================================================================
// Cart Overlay
// ============================================================================

#[component]
fn CartSheet() -> impl IntoView {
    let store = use_store();
    let view = Memo::new(move |_| store.view());
    let texts = store.content().cart;
    let empty = texts.empty.clone();
    let total_label = texts.total_label.clone();
    let checkout_label = texts.checkout_label.clone();

    view! {
        <div class="overlay" on:click=move |_| store.dispatch(StoreAction::CloseCart)></div>
        <aside class="cart-sheet">
            <div class="cart-sheet-header">
                <h2>{texts.title}</h2>
                <button class="close" on:click=move |_| store.dispatch(StoreAction::CloseCart)>
                    "\u{2715}"
                </button>
            </div>
            <Show
                when=move || !view.with(|v| v.cart_is_empty())
                fallback=move || view! { <p class="cart-empty">{empty.clone()}</p> }
            >
                <div class="cart-lines">
                    {move || view.with(|v| v.cart_lines.clone()).into_iter().map(|line| {
                        view! { <CartLineRow line=line/> }
                    }).collect_view()}
                </div>
                <div class="cart-total">
                    <span>{total_label.clone()}</span>
                    <strong>{move || view.with(|v| v.cart_total.display())}</strong>
                </div>
                <button class="btn btn-block" on:click=move |_| store.dispatch(StoreAction::Checkout)>
                    {checkout_label.clone()}
                </button>
            </Show>
        </aside>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_store();
    let id = line.product_id;
    let quantity = line.quantity;

    view! {
        <div class="cart-line">
            <img src=line.image alt=line.name.clone()/>
            <div class="cart-line-info">
                <h4>{line.name}</h4>
                <p class="price">{line.unit_price.display()}</p>
                <div class="quantity">
                    <button on:click=move |_| store.dispatch(StoreAction::SetQuantity(id, quantity - 1))>
                        "\u{2212}"
                    </button>
                    <span>{quantity}</span>
                    <button on:click=move |_| store.dispatch(StoreAction::SetQuantity(id, quantity + 1))>
                        "+"
                    </button>
                </div>
            </div>
            <button class="remove" on:click=move |_| store.dispatch(StoreAction::RemoveFromCart(id))>
                "\u{2715}"
            </button>
        </div>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with hero section and featured products.
#[component]
fn HomePage() -> impl IntoView {
    let store = use_store();
    let hero = store.content().hero;
    let featured = store.view().featured;

    view! {
        <section class="hero">
            <h1>
                {hero.headline.into_iter().map(|line| view! { <span>{line}</span> }).collect_view()}
            </h1>
            <p>{hero.tagline}</p>
            <button class="btn" on:click=move |_| store.dispatch(StoreAction::Navigate(Page::Catalog))>
                {hero.cta_label}
            </button>
        </section>

        <section class="featured">
            <div class="section-header">
                <h2>{hero.featured_heading}</h2>
                <button class="link" on:click=move |_| store.dispatch(StoreAction::Navigate(Page::Catalog))>
                    {hero.all_products_label}
                </button>
            </div>
            <ProductGrid products=featured/>
        </section>
    }
}

/// Catalog with the category filter.
#[component]
fn CatalogPage() -> impl IntoView {
    let store = use_store();
    let view = Memo::new(move |_| store.view());

    view! {
        <h1>{Page::Catalog.display_name()}</h1>
        <div class="categories">
            {move || view.with(|v| v.categories.clone()).into_iter().map(|chip| {
                let filter = chip.filter;
                view! {
                    <button
                        class="chip"
                        class:selected=chip.selected
                        on:click=move |_| store.dispatch(StoreAction::SelectCategory(filter.clone()))
                    >
                        {chip.label}
                    </button>
                }
            }).collect_view()}
        </div>
        {move || view! { <ProductGrid products=view.with(|v| v.products.clone())/> }}
    }
}

/// Order summary and the contact form.
#[component]
fn CheckoutPage() -> impl IntoView {
    let store = use_store();
    let texts = store.content().checkout;
    let form = RwSignal::new(CheckoutForm::default());
    let summary = Memo::new(move |_| store.summary());

    view! {
        <h1>{Page::Checkout.display_name()}</h1>
        <div class="checkout">
            <section class="order-summary">
                <h2>{texts.order_heading.clone()}</h2>
                {move || summary.with(|s| s.lines.clone()).into_iter().map(|line| view! {
                    <div class="summary-line">
                        <span>{line.label}</span>
                        <span>{line.total.display()}</span>
                    </div>
                }).collect_view()}
                <div class="summary-total">
                    <span>{store.content().cart.total_label}</span>
                    <strong>{move || summary.with(|s| s.total.display())}</strong>
                </div>
            </section>

            <section class="contact-form">
                <h2>{texts.contact_heading.clone()}</h2>
                {CheckoutField::ALL.into_iter().map(|field| {
                    let placeholder = texts.placeholder(field).to_string();
                    view! { <FormField field=field placeholder=placeholder form=form/> }
                }).collect_view()}
                <button class="btn btn-block">
                    {texts.confirm_label.clone()}
                </button>
            </section>
        </div>
    }
}

#[component]
fn FormField(field: CheckoutField, placeholder: String, form: RwSignal<CheckoutForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());

    view! {
        <label class="field">
            <span>{field.label()}</span>
            {if field.is_multiline() {
                view! {
                    <textarea
                        name=field.as_str()
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <input
                        type="text"
                        name=field.as_str()
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                }.into_any()
            }}
        </label>
    }
}

/// Delivery and payment information.
#[component]
fn DeliveryPage() -> impl IntoView {
    let store = use_store();
    let sections = store.content().delivery;

    view! {
        <h1>{Page::Delivery.display_name()}</h1>
        <div class="info-cards">
            {sections.into_iter().map(|section| view! {
                <div class="info-card">
                    <span class="icon">{icon_glyph(&section.icon)}</span>
                    <h3>{section.title}</h3>
                    {section.lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ContactsPage() -> impl IntoView {
    let store = use_store();
    let cards = store.content().contacts;

    view! {
        <h1>{Page::Contacts.display_name()}</h1>
        <div class="info-cards">
            {cards.into_iter().map(|card| view! {
                <div class="info-card">
                    <span class="icon">{icon_glyph(&card.icon)}</span>
                    <h3>{card.title}</h3>
                    <p class="primary">{card.primary}</p>
                    <p class="secondary">{card.secondary}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="products">
            {products.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    let add_label = store.content().hero.add_label;
    let price = product.price_display();
    let name = product.name.clone();
    let image = product.image.clone();
    let category = product.category.clone();

    view! {
        <div class="product-card">
            <img src=image alt=name.clone()/>
            <div class="product-info">
                <span class="category">{category}</span>
                <h3>{name}</h3>
                <div class="product-footer">
                    <p class="price">{price}</p>
                    <button class="btn" on:click=move |_| store.dispatch(StoreAction::AddToCart(product.clone()))>
                        {add_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::StoreApp;
    use shop_observability::SessionId;

    #[test]
    fn test_use_store_shares_provided_store() {
        let owner = Owner::new();
        owner.with(|| {
            let app = StoreApp::bundled().unwrap();
            let log = app.logger(SessionId::new("test"));
            let provided = Store::new(app, log);
            provide_context(provided);

            use_store().dispatch(StoreAction::Navigate(Page::Delivery));
            assert_eq!(provided.page(), Page::Delivery);
        });
    }

    #[test]
    #[should_panic]
    fn test_use_store_without_context_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_store();
        });
    }
}
