//! Build-time asset references shared across the workspace.
//!
//! Everything routes through the `asset!` pipeline so `dx` can bundle and
//! content-hash the files; shells consume these constants instead of spelling
//! out paths, keeping this crate the single owner of its assets.

use dioxus::prelude::*;

/// React logo mark rendered at the left edge of the navbar.
pub const NAV_ICON: Asset = asset!("/assets/nav-reactjs-icon.png");

/// Styling for the `nav` container and its `nav--*` children.
pub const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Page-level theme (palette, typography) shared by every shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
