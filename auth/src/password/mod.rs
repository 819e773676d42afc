pub mod errors;
pub mod salted;

pub use errors::PasswordError;
pub use salted::DigestScheme;
pub use salted::PasswordHasher;
pub use salted::HASH_SIZE;
pub use salted::RECORD_SIZE;
pub use salted::SALT_SIZE;
