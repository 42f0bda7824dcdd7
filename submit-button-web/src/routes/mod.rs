mod home;
mod validation;

pub use home::HomePage;
pub use validation::ValidationPage;
