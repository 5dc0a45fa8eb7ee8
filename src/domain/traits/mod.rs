//! Collaborator traits the user core depends on

mod hasher;
mod token;

pub use hasher::PasswordHasher;
pub use token::TokenIssuer;

#[cfg(test)]
pub use hasher::mock::MockPasswordHasher;
#[cfg(test)]
pub use token::mock::MockTokenIssuer;
