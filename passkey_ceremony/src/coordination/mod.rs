mod errors;
mod passkey;
mod session;

pub use errors::{CoordinationError, ErrorKind};
pub use passkey::CeremonyClient;
pub use session::{CeremonyKind, CeremonySession, CeremonyState};
