//! Shopfront storefront application.
//!
//! A storefront over the shopfront-commerce domain crate:
//! - One shared cart container, provided at the application root
//! - Navigation bar with a live cart badge and cart panel toggle
//! - Product listing with add-to-cart
//! - Checkout submission against the hosted payment provider

pub mod app;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
