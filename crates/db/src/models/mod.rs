pub mod customer;
pub mod department;
pub mod session;
pub mod ticket;
pub mod user;
