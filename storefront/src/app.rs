//! Application components and pages.

use crate::store::{provide_shared_cart, use_shared_cart};
use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use leptos::server_fn::error::ServerFnError;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shopfront_commerce::cart::CartLine;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::checkout::CheckoutSession;
use shopfront_commerce::{Currency, Money, ProductId};

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // The one cart every surface reads and mutates.
    provide_shared_cart();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/shopfront_storefront.css"/>
        <Meta name="description" content="Shopfront - a storefront with a single shared cart"/>
        <Title text="Shopfront"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=ShopPage/>
                    <Route path=path!("/checkout/success") view=CheckoutSuccessPage/>
                    <Route path=path!("/checkout/cancel") view=CheckoutCancelPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

/// Navigation bar: links, cart badge, cart panel toggle.
///
/// Reads the shared cart only; it keeps no copy of its own, so the badge
/// always agrees with the panel and with what checkout submits.
#[component]
fn Navbar() -> impl IntoView {
    let cart = use_shared_cart();
    let cart_open = RwSignal::new(false);
    let badge = move || cart.item_count();

    view! {
        <header>
            <h1>"Shopfront"</h1>
            <nav>
                <a href="/">"Collections"</a>
                <a href="/">"Men"</a>
                <a href="/">"Women"</a>
                <a href="/">"About"</a>
                <a href="/">"Contact"</a>
            </nav>
            <button
                class="cart-toggle"
                on:click=move |_| cart_open.update(|open| *open = !*open)
            >
                "Cart"
                <Show when=move || badge() > 0>
                    <span class="cart-badge">{badge}</span>
                </Show>
            </button>
            <Show when=move || cart_open.get()>
                <CartPanel/>
            </Show>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Shopfront - demo storefront"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Product listing page.
#[component]
fn ShopPage() -> impl IntoView {
    view! {
        <h2>"All Products"</h2>
        <leptos::suspense::Suspense fallback=move || view! { <ProductGridSkeleton/> }>
            <ProductGrid/>
        </leptos::suspense::Suspense>
    }
}

/// Fixed destination after a completed hosted payment.
#[component]
fn CheckoutSuccessPage() -> impl IntoView {
    view! {
        <div class="checkout-result">
            <h2>"Thank you!"</h2>
            <p>"Your payment is complete."</p>
            <a href="/">"Back to the shop"</a>
        </div>
    }
}

/// Fixed destination after an abandoned hosted payment.
#[component]
fn CheckoutCancelPage() -> impl IntoView {
    view! {
        <div class="checkout-result">
            <h2>"Payment cancelled"</h2>
            <p>"No charge was made."</p>
            <a href="/">"Back to the shop"</a>
        </div>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid() -> impl IntoView {
    let products = Resource::new(
        || (),
        |_| get_products(),
    );

    view! {
        {move || products.get().map(|result| match result {
            Ok(products) => view! {
                <div class="products">
                    {products.into_iter().map(|p| {
                        view! {
                            <ProductCard product=p/>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            }.into_any(),
            Err(e) => view! {
                <p class="load-error">"Error loading products: " {e.to_string()}</p>
            }.into_any(),
        })}
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_shared_cart();
    let quantity = RwSignal::new(1i64);
    let price = product.price.to_string();
    let line_source = product.clone();

    view! {
        <div class="product-card">
            <img src=product.image.clone() alt=product.name.clone()/>
            <div class="product-info">
                <p class="product-tagline">{product.tagline.clone()}</p>
                <h3>{product.name.clone()}</h3>
                <p class="price">{price}</p>
                <div class="quantity-stepper">
                    <button on:click=move |_| quantity.update(|q| *q = (*q - 1).max(1))>
                        "-"
                    </button>
                    <span>{quantity}</span>
                    <button on:click=move |_| quantity.update(|q| *q += 1)>
                        "+"
                    </button>
                </div>
                <button
                    class="btn"
                    on:click=move |_| {
                        match line_source.to_cart_line(quantity.get_untracked()) {
                            Ok(line) => cart.add_to_cart(line),
                            Err(e) => tracing::warn!(error = %e, "invalid add-to-cart intent"),
                        }
                    }
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

/// The cart panel: ordered lines, per-line removal, subtotal, checkout.
#[component]
fn CartPanel() -> impl IntoView {
    let cart = use_shared_cart();

    view! {
        <div class="cart-panel">
            <h2>"Cart"</h2>
            <Show
                when=move || !cart.is_empty()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <For
                    each=move || cart.cart_items()
                    key=|line| line.id.clone()
                    children=move |line: CartLine| {
                        let line_total = line
                            .price
                            .checked_mul(line.quantity)
                            .map(|total| total.to_string())
                            .unwrap_or_default();
                        let id = line.id.clone();
                        view! {
                            <div class="cart-line">
                                <img src=line.image.clone() alt=line.name.clone()/>
                                <div>
                                    <p>{line.name.clone()}</p>
                                    <p class="cart-line-math">
                                        {line.price.to_string()} " x " {line.quantity} " "
                                        <strong>{line_total}</strong>
                                    </p>
                                </div>
                                <button
                                    class="cart-line-remove"
                                    on:click=move |_| cart.remove_from_cart(&id)
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
                <div class="cart-subtotal">
                    <span>"Total"</span>
                    <strong>{move || cart.subtotal().to_string()}</strong>
                </div>
                <CheckoutButton/>
            </Show>
        </div>
    }
}

/// Submits the current snapshot for session creation, then redirects the
/// window to the hosted payment page.
#[component]
fn CheckoutButton() -> impl IntoView {
    let cart = use_shared_cart();
    let checkout = ServerAction::<CreateCheckoutSession>::new();
    let pending = checkout.pending();
    let value = checkout.value();

    Effect::new(move |_| {
        if let Some(Ok(session)) = value.get() {
            let _ = window().location().set_href(&session.url);
        }
    });

    view! {
        <button
            class="btn checkout"
            disabled=move || pending.get()
            on:click=move |_| {
                checkout.dispatch(CreateCheckoutSession {
                    cart_items: cart.cart_items(),
                });
            }
        >
            {move || if pending.get() { "Redirecting..." } else { "Checkout" }}
        </button>
        {move || value.get().map(|result| match result {
            Ok(_) => view! {
                <p class="checkout-note">"Taking you to payment..."</p>
            }.into_any(),
            Err(e) => view! {
                <p class="checkout-error">"Checkout failed: " {e.to_string()}</p>
            }.into_any(),
        })}
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton skeleton-image"></div>
            <div class="product-info">
                <div class="skeleton skeleton-title"></div>
                <div class="skeleton skeleton-price"></div>
            </div>
        </div>
    }
}

// ============================================================================
// Server Functions (API)
// ============================================================================

/// Get the product catalog.
#[leptos::server(prefix = "/api")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    Ok(demo_catalog())
}

/// Create a payment session for the submitted cart snapshot.
///
/// The snapshot is replayed through the domain cart, so a malformed
/// submission (duplicate ids, non-positive quantities) is rejected here
/// with no provider call. Provider rejection and transport failure come
/// back as explicit errors; the client keeps its cart untouched either
/// way.
#[leptos::server(
    prefix = "/api",
    endpoint = "create-checkout-session",
    input = Json,
    output = Json
)]
pub async fn create_checkout_session(
    cart_items: Vec<CartLine>,
) -> Result<CheckoutSession, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use shopfront_commerce::cart::Cart;
        use shopfront_commerce::checkout::CheckoutSessionRequest;
        use shopfront_gateway::{GatewayConfig, HostedPaymentClient, PaymentGateway};

        tracing::info!(line_count = cart_items.len(), "checkout submission received");

        let mut cart = Cart::new();
        for line in cart_items {
            cart.add_line(line)
                .map_err(|e| ServerFnError::new(e.to_string()))?;
        }

        let config = GatewayConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
        let request = CheckoutSessionRequest::from_cart(&cart, config.redirect_urls())
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let client = HostedPaymentClient::new(config);
        let session = client
            .create_session(&request)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        Ok(session)
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = cart_items;
        Err(ServerFnError::new("Server-only function"))
    }
}

/// The demo catalog the listing page renders.
fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("sneaker-fall-01"),
            name: "Fall Limited Edition Sneakers".to_string(),
            tagline: "Sneaker Company".to_string(),
            description: "Low-profile sneakers with a durable rubber outer sole."
                .to_string(),
            price: Money::new(12_500, Currency::USD),
            image: "/images/image-product-1.jpg".to_string(),
        },
        Product {
            id: ProductId::new("sneaker-trail-02"),
            name: "Trail Runner Pros".to_string(),
            tagline: "Sneaker Company".to_string(),
            description: "Grippy trail runners for wet autumn paths.".to_string(),
            price: Money::new(9_850, Currency::USD),
            image: "/images/image-product-2.jpg".to_string(),
        },
        Product {
            id: ProductId::new("boot-chelsea-03"),
            name: "Chelsea Leather Boots".to_string(),
            tagline: "Boot Works".to_string(),
            description: "Classic chelsea boots in full-grain leather.".to_string(),
            price: Money::new(14_900, Currency::USD),
            image: "/images/image-product-3.jpg".to_string(),
        },
        Product {
            id: ProductId::new("sandal-summer-04"),
            name: "Summer Strap Sandals".to_string(),
            tagline: "Sneaker Company".to_string(),
            description: "Light strap sandals, end-of-season colourways.".to_string(),
            price: Money::new(5_999, Currency::USD),
            image: "/images/image-product-4.jpg".to_string(),
        },
    ]
}
