pub mod icons;
pub mod nav;

pub use nav::Nav;
