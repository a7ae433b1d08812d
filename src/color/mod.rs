pub(crate) mod named;
