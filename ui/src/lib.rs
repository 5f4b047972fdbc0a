//! Shared UI crate for ReactFacts. The navbar component and the bundled
//! assets behind it live here; platform shells only mount and style it.

pub mod assets;

pub mod components {
    // Static site navbar (components/navbar.rs)
    pub mod navbar;
    pub use navbar::Navbar;
}
