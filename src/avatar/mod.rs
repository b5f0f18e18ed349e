pub(crate) mod color;
pub(crate) mod compose;
pub(crate) mod fit;
pub(crate) mod name;
