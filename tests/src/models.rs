//! Records shared by the integration tests.

use modelmap::Record;
use std::time::SystemTime;

/// Store-assigned key, timestamps, soft delete, an array column, and an
/// untagged field.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "books"]
pub struct Book {
    #[db = "col~id;prk;seq;"]
    pub id: Option<i64>,

    #[db = "col~title;req;"]
    pub title: String,

    #[db = "col~pages;"]
    pub pages: i32,

    #[db = "col~tags;"]
    pub tags: Vec<String>,

    #[db = "col~created_at;cat;"]
    pub created_at: Option<SystemTime>,

    #[db = "col~updated_at;uat;"]
    pub updated_at: Option<SystemTime>,

    #[db = "col~deleted_at;dat;"]
    pub deleted_at: Option<SystemTime>,

    pub scratch: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "authors"]
pub struct Author {
    #[db = "col~id;prk;seq;"]
    pub id: Option<i64>,

    #[db = "col~name;"]
    pub name: String,

    #[db = "col~created_at;cat;"]
    pub created_at: Option<SystemTime>,

    #[db = "col~updated_at;uat;"]
    pub updated_at: Option<SystemTime>,

    #[db = "col~deleted_at;dat;"]
    pub deleted_at: Option<SystemTime>,
}

/// Caller-assigned key.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "settings"]
pub struct Setting {
    #[db = "col~id;prk;"]
    pub id: Option<String>,

    #[db = "col~name;"]
    pub name: String,
}

/// Unique key and no primary key.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "accounts"]
pub struct Account {
    #[db = "col~email;unq;"]
    pub email: Option<String>,

    #[db = "col~display_name;"]
    pub display_name: String,

    #[db = "col~updated_at;uat;"]
    pub updated_at: Option<SystemTime>,

    #[db = "col~cache;ign;"]
    pub cache: Vec<u8>,
}

/// Composite caller-assigned key.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "memberships"]
pub struct Membership {
    #[db = "col~team_id;prk;"]
    pub team_id: i64,

    #[db = "col~user_id;prk;"]
    pub user_id: i64,

    #[db = "col~role;"]
    pub role: String,
}

/// No keys at all.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "events"]
pub struct Event {
    #[db = "col~kind;"]
    pub kind: String,

    #[db = "col~at;cat;"]
    pub at: Option<SystemTime>,
}

/// No mapped fields.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "nothing"]
pub struct Nothing {
    pub note: String,
}
