pub(crate) mod anim;
pub(crate) mod ease;
pub(crate) mod reveal;
pub(crate) mod smoothing;
pub(crate) mod state;
pub(crate) mod timeline;
