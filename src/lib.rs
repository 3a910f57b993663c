// Library surface shared by the two binaries and the integration tests.
pub mod charts;
pub mod clean;
pub mod extract;
pub mod feedback;
pub mod game;
pub mod record;
pub mod render;
pub mod report;
pub mod util;
pub mod wordlist;
