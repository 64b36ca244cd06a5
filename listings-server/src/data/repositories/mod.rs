pub(crate) mod mysql;
