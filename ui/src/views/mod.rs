mod about;
pub use about::About;

mod analyse;
pub use analyse::Analyse;

mod home;
pub use home::Home;
