pub(crate) mod bbox;
pub(crate) mod detect;
pub(crate) mod resolve;
