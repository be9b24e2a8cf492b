//! Page generation modules
//!
//! Every documentation page shares one HTML shell; the client bundle fills
//! in page content after load. The shell module composes the shared
//! components into that document.

pub mod shell;
