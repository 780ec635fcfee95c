//! Built-in data view parsers.

mod generic;
mod kwic;

pub use generic::GenericDataViewParser;
pub use kwic::KwicDataViewParser;
