pub(crate) mod migrate;
pub(crate) mod records;
pub(crate) mod reset;
pub(crate) mod serve;
