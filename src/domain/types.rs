use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Registered blog user. The password stays opaque and never leaves the
/// service through a response body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
}

/// Fields required to insert a new user. The registration date is set by
/// the usecase, not the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
}

/// A user together with their favorites, as exposed over the API.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub favorites: Vec<Favorite>,
}

/// The five allowed planet climates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Arid,
    Temperate,
    Tropical,
    Frozen,
    Murky,
}

impl Climate {
    pub const ALL: [Climate; 5] = [
        Climate::Arid,
        Climate::Temperate,
        Climate::Tropical,
        Climate::Frozen,
        Climate::Murky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Arid => "arid",
            Climate::Temperate => "temperate",
            Climate::Tropical => "tropical",
            Climate::Frozen => "frozen",
            Climate::Murky => "murky",
        }
    }
}

impl FromStr for Climate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arid" => Ok(Climate::Arid),
            "temperate" => Ok(Climate::Temperate),
            "tropical" => Ok(Climate::Tropical),
            "frozen" => Ok(Climate::Frozen),
            "murky" => Ok(Climate::Murky),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: Climate,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub population: i64,
    pub climate: Climate,
}

/// Character record. Birth year and gender are free text.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
}

/// Join row associating a user with either a planet or a character.
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

/// What a new favorite points at. Encodes the exactly-one-of constraint the
/// favorites table itself leaves open.
#[derive(Debug, Clone, Copy)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub user_id: i32,
    pub target: FavoriteTarget,
}
