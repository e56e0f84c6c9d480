mod about;
mod contact;
mod home;
mod interview;

pub use about::About;
pub use contact::Contact;
pub use home::{hero_title_parts, Home};
pub use interview::Interview;
