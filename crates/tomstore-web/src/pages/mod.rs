//! Page components

mod about;
mod basket;
mod catalog;
mod contact;
mod home;
mod login;
mod register;

pub use about::About;
pub use basket::BasketPage;
pub use catalog::Catalog;
pub use contact::Contact;
pub use home::Home;
pub use login::Login;
pub use register::Register;
