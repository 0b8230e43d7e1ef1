mod config;
mod macros;

pub mod errors;

// Submodules only expose their public API to the parent module

pub mod store {
    mod bounded;
    mod origin;

    pub use bounded::BoundedStore;
    pub use origin::SeekOrigin;
}

pub mod session {
    mod outcome;
    mod request;
    mod runner;

    pub use outcome::Outcome;
    pub use request::Request;
    pub use runner::{SessionLoop, SessionResult};
}

pub mod shared {
    pub mod logger;
}
