pub mod auth;
pub mod empresa;
pub mod i18n;
