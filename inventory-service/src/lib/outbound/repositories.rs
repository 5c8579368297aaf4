pub mod account;
pub mod product;

pub use account::PostgresAccountRepository;
pub use product::PostgresProductRepository;
