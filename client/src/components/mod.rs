//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Navbar` and `HeroBanner` are independent siblings under `App`. Both take
//! the validated site configuration as a prop; the banner owns the playback
//! state signal and hands it to its children.

pub mod hero_banner;
pub mod navbar;
pub mod video_card;
pub mod volume_control;
