//! Fixed roster of dog profiles.
//!
//! The store is a compiled-in literal: constructed once, ordered, never
//! mutated. There is no load step and no error path.

use serde::Serialize;

use crate::assets::{ImageRes, TextRes};

/// One dog's static profile data. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DogRecord {
    /// Handle to the display name.
    pub name: TextRes,
    /// Age in years.
    pub age: u32,
    /// Handle to the icon art.
    pub image: ImageRes,
    /// Handle to the hobby/about description.
    pub hobby: TextRes,
}

impl DogRecord {
    /// Build a record from its four handles.
    #[must_use]
    pub const fn new(name: &'static str, age: u32, image: &'static str, hobby: &'static str) -> Self {
        Self {
            name: TextRes::new(name),
            age,
            image: ImageRes::new(image),
            hobby: TextRes::new(hobby),
        }
    }
}

const DOGS: &[DogRecord] = &[
    DogRecord::new("dog/name/koda", 2, "img/dog/koda", "dog/hobby/koda"),
    DogRecord::new("dog/name/lola", 16, "img/dog/lola", "dog/hobby/lola"),
    DogRecord::new("dog/name/frankie", 2, "img/dog/frankie", "dog/hobby/frankie"),
    DogRecord::new("dog/name/nox", 8, "img/dog/nox", "dog/hobby/nox"),
    DogRecord::new("dog/name/faye", 8, "img/dog/faye", "dog/hobby/faye"),
    DogRecord::new("dog/name/bella", 14, "img/dog/bella", "dog/hobby/bella"),
    DogRecord::new("dog/name/moana", 2, "img/dog/moana", "dog/hobby/moana"),
    DogRecord::new("dog/name/tzeitel", 7, "img/dog/tzeitel", "dog/hobby/tzeitel"),
    DogRecord::new("dog/name/leroy", 4, "img/dog/leroy", "dog/hobby/leroy"),
];

/// Read-only access to the roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileStore;

impl ProfileStore {
    /// The full roster, in display order. Deterministic: the same sequence
    /// every call for the process lifetime.
    #[must_use]
    pub const fn all() -> &'static [DogRecord] {
        DOGS
    }

    /// Number of records in the roster.
    #[must_use]
    pub const fn len() -> usize {
        DOGS.len()
    }
}
