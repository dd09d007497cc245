//! # Passbook
//!
//! A minimal login service built around a signed-cookie session. The
//! `username` cookie carries `base64(username).HMAC_HEX`, signed with a
//! process-wide secret; no server-side session state exists, so every
//! request is authenticated by verifying the cookie signature alone.
//!
//! - **Credential policies:** `plain` compares stored passwords verbatim;
//!   `salted` compares SHA-256 digests of password + salt.
//! - **Response formats:** `html` renders pages directly; `json` answers
//!   login posts with `{success, message}` for the scripted form.

pub mod cli;
pub mod passbook;
