mod common;
mod domain;
