pub mod claims;
pub mod error;
pub mod factory;
pub mod public_key;
pub mod signature;
pub mod token;
pub mod verifier;

pub use claims::Claims;
pub use error::{SetupError, VerifyError};
pub use factory::build_jwt_verifier;
pub use token::Token;
pub use verifier::JwtVerifier;
