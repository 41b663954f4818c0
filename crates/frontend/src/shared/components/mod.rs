pub mod chart_card;
pub mod error_boundary;
pub mod modal;
pub mod pagination_controls;
pub mod stat_card;
