/*! Integration tests for mappath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the public API:
 * - resolve: Raw lookups through maps and lists (get/has/lookup)
 * - scalars: Scalar accessors and their fallback semantics
 * - lists: Element-wise list coercion
 * - children: Sub-structure handles
 * - load: Building documents from JSON/YAML text and files
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("mappath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod lists;
mod load;
mod resolve;
