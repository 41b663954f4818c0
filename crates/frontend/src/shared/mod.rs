pub mod components;
pub mod date_utils;
pub mod export;
pub mod i18n;
pub mod icons;
pub mod number_format;
pub mod table_view;
pub mod theme;
pub mod toast;
