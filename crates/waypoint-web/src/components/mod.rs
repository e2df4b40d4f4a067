mod nav_link;
mod section;

pub use nav_link::{NavContext, NavLink, NavLinks};
pub use section::Section;
