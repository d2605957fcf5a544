//! Targeted password-guess wordlists built from a subject profile.
//!
//! ```no_run
//! use profilelist::{GenerateOptions, Profile, generate};
//!
//! let profile = Profile {
//!     first_name: "John".into(),
//!     last_name: "Smith".into(),
//!     years: vec!["1990".into()],
//!     ..Default::default()
//! };
//! let words = generate(&profile, &GenerateOptions::default())?;
//! println!("{} candidates, seed {}", words.len(), words.seed());
//! # Ok::<(), profilelist::GenerateError>(())
//! ```

pub mod error;
pub mod profile;
pub mod settings;
pub mod wordlist;

pub use error::GenerateError;
pub use profile::Profile;
pub use settings::Settings;
pub use wordlist::{GenerateOptions, Wordlist, generate};
