use crate::cert::clock::{Clock, SystemClock};
use crate::cert::{Certificate, CertificateId};

/// Issues course-completion certificates.
///
/// Holds no state beyond its clock, so one issuer can be shared across
/// threads by reference.
#[derive(Debug, Clone, Default)]
pub struct CertificateIssuer<C: Clock = SystemClock> {
    clock: C,
}

impl CertificateIssuer<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> CertificateIssuer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Issue a certificate. Accepts any strings, including empty ones.
    pub fn issue(&self, student: &str, course: &str, date: &str) -> Certificate {
        tracing::info!("Generating certificate for {student} in {course}");

        let id = CertificateId::generate(student, course, self.clock.now_millis());
        tracing::debug!("Issued certificate {id} dated {date}");

        Certificate::new(id, student, course, date)
    }
}

/// Issue a certificate using the system clock
pub fn issue(student: &str, course: &str, date: &str) -> Certificate {
    CertificateIssuer::new().issue(student, course, date)
}
