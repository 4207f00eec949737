pub mod cert;
pub mod cli;
pub mod utils;

// Re-export specific items to avoid conflicts
pub use cert::{issue, Certificate, CertificateId, CertificateIssuer, ISSUER_NAME};
pub use cli::{args, commands};
pub use utils::{config, errors, output, paths};
