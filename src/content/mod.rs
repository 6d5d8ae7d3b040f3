pub(crate) mod feed;
pub(crate) mod record;
pub(crate) mod slide;
