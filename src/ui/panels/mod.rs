pub(crate) mod entry;
pub(crate) mod items;
pub(crate) mod overview;
