//! Types which do not fit elsewhere, notably [errors](err).

pub mod err;
