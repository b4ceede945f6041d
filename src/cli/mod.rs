pub mod display;
pub mod parser;
pub mod session;

pub use parser::{parse_command, Command};
pub use session::{run_session, run_stdio, Phase, Session, SessionConfig};
