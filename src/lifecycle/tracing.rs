//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! The library itself only emits events; installing a subscriber is left to the binary
//! (or to whoever embeds the catalog).
//!
//! ## What Gets Traced
//!
//! - **Construction**: Authors and magazines created, articles published (`info`)
//! - **Validation failures**: The rejected entity and the reason (`warn`)
//! - **Queries**: Every registry scan with the number of scanned and matched entries (`debug`)
//! - **Updates**: Magazine renames and re-categorisations (`debug`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Construction events only
//! RUST_LOG=info cargo run
//!
//! # Include registry scans and call payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Author created author_id=author_1 name=Sam
//! INFO Registered entity_type="Magazine" id=magazine_1 size=1
//! INFO Registered entity_type="Article" id=article_1 size=1
//! INFO Article published article_id=article_1 author=Sam magazine=Vogue size=1
//! WARN Article rejected author_id=author_2 error=Article title must be 5-50 characters long, got 2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Entity type is carried as a field instead
        .compact()
        .init();
}
