//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the store's events carry a
//! `slice` field and the gateway's a `collection` field instead.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, and shutdown with applied/rejected counts
//! - **Operations**: every applied action at `info`, every rejected one at `warn`
//! - **Persistence**: gateway writes at `debug`, retries at `warn`, final failures at `error`
//! - **Remote listener**: newly added documents and the source of each snapshot
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run -p product-catalog
//! RUST_LOG=debug cargo run -p product-catalog     # full action payloads
//! RUST_LOG=store_framework=debug,info cargo run -p product-catalog
//! ```
//!
//! With `RUST_LOG=info` the demo prints roughly:
//!
//! ```text
//! INFO Store started slice="ProductState"
//! INFO add_product: Applied slice="ProductState" applied=1
//! INFO add_toast: Applied slice="ProductState" applied=2
//! WARN add_product: Rejected slice="ProductState" error=Product name must not be empty ...
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
