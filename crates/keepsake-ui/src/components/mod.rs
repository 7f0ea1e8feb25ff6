//! Reusable UI components
//!
//! All components rely on class names defined in the app's global styles.

mod button;
mod particles;
mod pills;
mod progress_dots;

pub use button::*;
pub use particles::*;
pub use pills::*;
pub use progress_dots::*;
