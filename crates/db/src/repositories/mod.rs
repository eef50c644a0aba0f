mod customer_repo;
mod department_repo;
mod session_repo;
mod ticket_repo;
mod user_repo;

pub use customer_repo::CustomerRepo;
pub use department_repo::DepartmentRepo;
pub use session_repo::SessionRepo;
pub use ticket_repo::TicketRepo;
pub use user_repo::UserRepo;
