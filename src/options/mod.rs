pub(crate) mod global;
pub(crate) mod model;
