//! External delivery channels for job board events.

pub mod email;
