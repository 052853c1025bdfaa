pub mod components;
pub mod icons;
pub mod notifications;
