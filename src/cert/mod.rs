pub mod certificate;
pub mod clock;
pub mod identifier;
pub mod issuer;

pub use certificate::{Certificate, CertificateError, CertificateField, ISSUER_NAME};
pub use clock::{Clock, FixedClock, SystemClock};
pub use identifier::{CertificateId, IdParseError};
pub use issuer::{issue, CertificateIssuer};
