//! Browser glue shared by the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every public function here has a `hydrate` body that talks to `web-sys`
//! and a server body that does nothing, so components call them without
//! feature gates of their own.

pub mod clipboard;
pub mod media;
pub mod thumbnails;
pub mod viewport;
