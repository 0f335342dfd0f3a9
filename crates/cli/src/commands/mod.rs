pub(crate) mod interactive;
pub(crate) mod search;
