pub mod io;
pub(crate) mod json;
